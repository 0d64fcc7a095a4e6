//! Strategies: pluggable hit/hold decisions for seated players.
//!
//! A strategy sees the round through the read-only [`GameEngine`] view and
//! the deciding [`Player`]; it never touches the deck or other hands. The
//! dealer does not use one: it always draws to 17.

use crate::engine::GameEngine;
use crate::player::Player;
use std::fmt;
use std::str::FromStr;

/// A player's decision at one decision point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Action {
    Hit,
    /// Stop drawing for the rest of the round. Also the default answer.
    #[default]
    Hold,
}

/// Decides whether a seated player hits or holds.
pub trait Strategy {
    fn decide(&self, game: &dyn GameEngine, me: &Player) -> Action;

    /// Short label used in logs and reports.
    fn label(&self) -> String {
        "custom".to_string()
    }
}

/// Strategy backed by a closure or fn, see [`from_fn`].
pub struct FnStrategy<F>(F);

impl<F> Strategy for FnStrategy<F>
where
    F: Fn(&dyn GameEngine, &Player) -> Action,
{
    fn decide(&self, game: &dyn GameEngine, me: &Player) -> Action {
        (self.0)(game, me)
    }
}

/// Wrap a closure as a [`Strategy`].
///
/// ```
/// use blackjack_rs::player::Player;
/// use blackjack_rs::strategy::{from_fn, Action};
///
/// let cautious = from_fn(|_, me| if me.hand().sum() >= 12 { Action::Hold } else { Action::Hit });
/// let player = Player::new("Ringo", cautious);
/// assert!(!player.is_dealer());
/// ```
pub fn from_fn<F>(f: F) -> FnStrategy<F>
where
    F: Fn(&dyn GameEngine, &Player) -> Action,
{
    FnStrategy(f)
}

/// Hit below `threshold`, hold at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldAt(pub u32);

impl Strategy for HoldAt {
    fn decide(&self, _game: &dyn GameEngine, me: &Player) -> Action {
        if me.hand().sum() >= self.0 {
            Action::Hold
        } else {
            Action::Hit
        }
    }

    fn label(&self) -> String {
        format!("hold-at-{}", self.0)
    }
}

/// Take exactly one extra card, then hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitOnce;

impl Strategy for HitOnce {
    fn decide(&self, _game: &dyn GameEngine, me: &Player) -> Action {
        if me.hand().len() >= 3 {
            Action::Hold
        } else {
            Action::Hit
        }
    }

    fn label(&self) -> String {
        "hit-once".to_string()
    }
}

/// Never draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysHold;

impl Strategy for AlwaysHold {
    fn decide(&self, _game: &dyn GameEngine, _me: &Player) -> Action {
        Action::Hold
    }

    fn label(&self) -> String {
        "always-hold".to_string()
    }
}

/// Named built-in strategies, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StrategyKind {
    HoldAt(u32),
    HitOnce,
    AlwaysHold,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::HoldAt(n) => Box::new(HoldAt(n)),
            StrategyKind::HitOnce => Box::new(HitOnce),
            StrategyKind::AlwaysHold => Box::new(AlwaysHold),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::HoldAt(n) => write!(f, "hold-at-{n}"),
            StrategyKind::HitOnce => f.write_str("hit-once"),
            StrategyKind::AlwaysHold => f.write_str("always-hold"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StrategyParseError {
    #[error("unknown strategy '{0}' (expected hold-at-<n>, hit-once or always-hold)")]
    Unknown(String),
}

impl FromStr for StrategyKind {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        match t.as_str() {
            "hit-once" => return Ok(StrategyKind::HitOnce),
            "always-hold" => return Ok(StrategyKind::AlwaysHold),
            _ => {}
        }
        t.strip_prefix("hold-at-")
            .and_then(|n| n.parse().ok())
            .map(StrategyKind::HoldAt)
            .ok_or_else(|| StrategyParseError::Unknown(s.to_string()))
    }
}
