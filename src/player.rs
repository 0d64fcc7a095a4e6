use crate::cards::Card;
use crate::engine::GameEngine;
use crate::hand::Hand;
use crate::strategy::{Action, Strategy};
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("non-dealer player '{0}' must have a strategy")]
    MissingStrategy(String),
}

/// How a round ended for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

/// Running win/draw/loss tally. Only the round engine records results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    wins: u32,
    draws: u32,
    losses: u32,
}

impl Record {
    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// `None` until at least one round has been recorded.
    pub fn win_rate(&self) -> Option<f64> {
        self.rate(self.wins)
    }

    pub fn draw_rate(&self) -> Option<f64> {
        self.rate(self.draws)
    }

    pub fn loss_rate(&self) -> Option<f64> {
        self.rate(self.losses)
    }

    fn rate(&self, count: u32) -> Option<f64> {
        match self.rounds() {
            0 => None,
            total => Some(f64::from(count) / f64::from(total)),
        }
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
    }
}

/// A card as shown to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShownCard {
    Up(Card),
    FaceDown,
}

impl fmt::Display for ShownCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShownCard::Up(card) => write!(f, "{card}"),
            ShownCard::FaceDown => f.write_str("face down"),
        }
    }
}

/// What the table can see of a player's cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandView<'a> {
    /// A seated player's hand, fully visible.
    Open(&'a Hand),
    /// The dealer: the first card up, the second face down.
    Dealer { up: Option<Card> },
}

impl HandView<'_> {
    pub fn shown(&self) -> Vec<ShownCard> {
        match self {
            HandView::Open(hand) => hand.as_slice().iter().copied().map(ShownCard::Up).collect(),
            HandView::Dealer { up: Some(card) } => vec![ShownCard::Up(*card), ShownCard::FaceDown],
            HandView::Dealer { up: None } => Vec::new(),
        }
    }
}

impl fmt::Display for HandView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: Vec<String> = self.shown().iter().map(ToString::to_string).collect();
        f.write_str(&shown.join(", "))
    }
}

enum Role {
    Dealer,
    Seat(Box<dyn Strategy>),
}

/// A participant: the dealer, or a seat driven by a [`Strategy`].
///
/// ```
/// use blackjack_rs::player::Player;
/// use blackjack_rs::strategy::HoldAt;
///
/// let john = Player::new("John", HoldAt(17));
/// assert_eq!(john.record().rounds(), 0);
/// assert_eq!(john.record().win_rate(), None);
/// ```
pub struct Player {
    name: String,
    hand: Hand,
    role: Role,
    record: Record,
}

impl Player {
    pub fn new<S>(name: impl Into<String>, strategy: S) -> Self
    where
        S: Strategy + 'static,
    {
        Self::with_role(name.into(), Role::Seat(Box::new(strategy)))
    }

    pub fn dealer(name: impl Into<String>) -> Self {
        Self::with_role(name.into(), Role::Dealer)
    }

    /// Untyped constructor. A non-dealer without a strategy is rejected here
    /// rather than at its first decision.
    pub fn try_new(
        name: impl Into<String>,
        strategy: Option<Box<dyn Strategy>>,
        dealer: bool,
    ) -> Result<Self, PlayerError> {
        let name = name.into();
        let role = match (strategy, dealer) {
            (_, true) => Role::Dealer,
            (Some(s), false) => Role::Seat(s),
            (None, false) => {
                log::warn!("rejecting player '{name}': non-dealer without a strategy");
                return Err(PlayerError::MissingStrategy(name));
            }
        };
        Ok(Self::with_role(name, role))
    }

    fn with_role(name: String, role: Role) -> Self {
        Self { name, hand: Hand::new(), role, record: Record::default() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub(crate) fn record_outcome(&mut self, outcome: Outcome) {
        self.record.record(outcome);
    }

    /// Label of the attached strategy, `None` for the dealer.
    pub fn strategy_label(&self) -> Option<String> {
        match &self.role {
            Role::Seat(s) => Some(s.label()),
            Role::Dealer => None,
        }
    }

    /// Cards as the table sees them: the dealer's second card stays hidden.
    pub fn cards(&self) -> HandView<'_> {
        match self.role {
            Role::Dealer => HandView::Dealer { up: self.hand.first() },
            Role::Seat(_) => HandView::Open(&self.hand),
        }
    }

    /// Ask the strategy for a decision; `None` when this player has none.
    pub(crate) fn decide(&self, game: &dyn GameEngine) -> Option<Action> {
        match &self.role {
            Role::Seat(s) => Some(s.decide(game, self)),
            Role::Dealer => None,
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("dealer", &self.is_dealer())
            .field("strategy", &self.strategy_label())
            .field("hand", &self.hand)
            .field("record", &self.record)
            .finish()
    }
}

fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{:.2}%", r * 100.0),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "------------")?;
        writeln!(f, "Wins: {}", percent(self.record.win_rate()))?;
        writeln!(f, "Losses: {}", percent(self.record.loss_rate()))?;
        write!(f, "Draws: {}", percent(self.record.draw_rate()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::strategy::{HitOnce, StrategyKind};

    #[test]
    fn try_new_rejects_seat_without_strategy() {
        let err = Player::try_new("Paul", None, false).unwrap_err();
        assert_eq!(err, PlayerError::MissingStrategy("Paul".into()));
        assert!(Player::try_new("house", None, true).unwrap().is_dealer());
        let george = Player::try_new("George", Some(StrategyKind::HitOnce.build()), false).unwrap();
        assert_eq!(george.strategy_label().as_deref(), Some("hit-once"));
    }

    #[test]
    fn rates_are_none_before_any_round() {
        let p = Player::new("Paul", HitOnce);
        assert_eq!(p.record().win_rate(), None);
        assert_eq!(p.record().draw_rate(), None);
        assert_eq!(p.record().loss_rate(), None);
        assert_eq!(p.to_string(), "Paul\n------------\nWins: n/a\nLosses: n/a\nDraws: n/a");
    }

    #[test]
    fn rates_follow_recorded_outcomes() {
        let mut p = Player::new("Paul", HitOnce);
        p.record_outcome(Outcome::Win);
        p.record_outcome(Outcome::Win);
        p.record_outcome(Outcome::Draw);
        p.record_outcome(Outcome::Loss);
        assert_eq!(p.record().rounds(), 4);
        assert_eq!(p.record().win_rate(), Some(0.5));
        assert_eq!(p.record().draw_rate(), Some(0.25));
        assert!(p.to_string().contains("Wins: 50.00%"));
    }

    #[test]
    fn dealer_view_hides_second_card() {
        let mut dealer = Player::dealer("dealer");
        assert!(dealer.cards().shown().is_empty());
        dealer
            .hand_mut()
            .add(Card::new(Rank::King, Suit::Hearts))
            .add(Card::new(Rank::Seven, Suit::Clubs));
        assert_eq!(
            dealer.cards().shown(),
            vec![ShownCard::Up(Card::new(Rank::King, Suit::Hearts)), ShownCard::FaceDown]
        );
        assert_eq!(dealer.cards().to_string(), "k of hearts, face down");
        assert_eq!(dealer.hand().sum(), 17);
    }

    #[test]
    fn seat_view_shows_whole_hand() {
        let mut p = Player::new("John", HitOnce);
        p.hand_mut().add(Card::new(Rank::Two, Suit::Clubs)).add(Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(p.cards(), HandView::Open(p.hand()));
        assert_eq!(p.cards().to_string(), "2 of clubs, a of spades");
    }
}
