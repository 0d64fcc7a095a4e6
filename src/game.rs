use crate::config::RoundConfig;
use crate::deck::{Deck, DeckError};
use crate::player::{Outcome, Player};
use crate::strategy::Action;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The dealer draws while below this total.
pub const DEALER_STANDS_ON: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Created,
    Dealt,
    Resolved,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("cards must be dealt before playing")]
    PlayBeforeDeal,
    #[error("round is already over")]
    RoundOver,
    #[error("player '{0}' has no strategy to decide with")]
    MissingStrategy(String),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Final state of one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatResult {
    pub name: String,
    pub total: u32,
    pub outcome: Outcome,
}

/// Summary of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub dealer_total: u32,
    /// The round ended on the dealer's blackjack before any seat acted.
    pub dealer_blackjack: bool,
    /// One entry per seat, in seating order.
    pub seats: Vec<SeatResult>,
}

impl RoundReport {
    pub fn outcome_of(&self, name: &str) -> Option<Outcome> {
        self.seats.iter().find(|s| s.name == name).map(|s| s.outcome)
    }
}

/// One round of blackjack: deal, dealer blackjack check, seat turns, dealer
/// turn, settlement.
///
/// Seats are borrowed for the round so their records accumulate across
/// rounds; the dealer belongs to the round.
///
/// ```
/// use blackjack_rs::config::RoundConfig;
/// use blackjack_rs::game::BlackJack;
/// use blackjack_rs::player::{Outcome, Player};
/// use blackjack_rs::strategy::HoldAt;
///
/// let mut john = Player::new("John", HoldAt(17));
/// let mut game = BlackJack::with_config([&mut john], RoundConfig::default().unshuffled());
/// game.deal().unwrap();
/// let report = game.play().unwrap();
/// // John busts on 22 while the dealer also busts: the seat still loses.
/// assert_eq!(report.outcome_of("John"), Some(Outcome::Loss));
/// assert_eq!(john.record().losses(), 1);
/// ```
#[derive(Debug)]
pub struct BlackJack<'p> {
    pub(crate) players: Vec<&'p mut Player>,
    pub(crate) dealer: Player,
    pub(crate) deck: Deck,
    pub(crate) phase: Phase,
    config: RoundConfig,
    rng: ChaCha8Rng,
}

impl<'p> BlackJack<'p> {
    pub fn new<I>(players: I) -> Self
    where
        I: IntoIterator<Item = &'p mut Player>,
    {
        Self::with_config(players, RoundConfig::default())
    }

    pub fn with_config<I>(players: I, config: RoundConfig) -> Self
    where
        I: IntoIterator<Item = &'p mut Player>,
    {
        let seed = config.rng_seed.unwrap_or_else(|| rand::rng().random());
        Self {
            players: players.into_iter().collect(),
            dealer: Player::dealer("dealer"),
            deck: Deck::standard(),
            phase: Phase::Created,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dealer(&self) -> &Player {
        &self.dealer
    }

    pub fn players(&self) -> Vec<&Player> {
        self.players.iter().map(|p| &**p).collect()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Build and shuffle a fresh deck, then deal two cards to the dealer and
    /// two to each seat in order. Dealing again before play starts over.
    pub fn deal(&mut self) -> Result<(), GameError> {
        if self.phase == Phase::Resolved {
            return Err(GameError::RoundOver);
        }
        let mut deck = self.config.stacked_deck.clone().unwrap_or_else(Deck::standard);
        if self.config.shuffle {
            deck.shuffle_with(&mut self.rng);
        }
        self.deck = deck;

        let hand = self.dealer.hand_mut();
        hand.clear();
        hand.extend(self.deck.draw_n(2)?);
        for player in self.players.iter_mut() {
            let hand = player.hand_mut();
            hand.clear();
            hand.extend(self.deck.draw_n(2)?);
        }

        log::debug!(
            "dealt {} seat(s), dealer shows {}",
            self.players.len(),
            self.dealer.cards()
        );
        self.phase = Phase::Dealt;
        Ok(())
    }

    /// Play the dealt round to completion and record every seat's outcome.
    ///
    /// Any error aborts the round: it ends `Resolved` and no outcome is
    /// recorded.
    pub fn play(&mut self) -> Result<RoundReport, GameError> {
        match self.phase {
            Phase::Created => return Err(GameError::PlayBeforeDeal),
            Phase::Resolved => return Err(GameError::RoundOver),
            Phase::Dealt => {}
        }
        let result = self.run();
        self.phase = Phase::Resolved;
        if let Err(e) = &result {
            log::debug!("round aborted: {e}");
        }
        result
    }

    fn run(&mut self) -> Result<RoundReport, GameError> {
        if self.dealer_has_blackjack() {
            log::debug!("dealer blackjack: {}", self.dealer.hand());
            return Ok(self.settle(true));
        }
        for seat in 0..self.players.len() {
            self.play_seat(seat)?;
        }
        self.play_dealer()?;
        Ok(self.settle(false))
    }

    fn dealer_has_blackjack(&self) -> bool {
        let shows_ten_or_ace = self.dealer.hand().first().is_some_and(|c| c.is_ten_or_ace());
        shows_ten_or_ace && self.dealer.hand().sum() == 21
    }

    fn play_seat(&mut self, seat: usize) -> Result<(), GameError> {
        loop {
            let player = &*self.players[seat];
            let action = player
                .decide(&*self)
                .ok_or_else(|| GameError::MissingStrategy(player.name().to_string()))?;
            if action != Action::Hit {
                return Ok(());
            }
            let card = self.deck.draw()?;
            let player = &mut *self.players[seat];
            player.hand_mut().add(card);
            log::trace!("{} hits: {} ({})", player.name(), card, player.hand().sum());
        }
    }

    fn play_dealer(&mut self) -> Result<(), GameError> {
        while self.dealer.hand().sum() < DEALER_STANDS_ON {
            let card = self.deck.draw()?;
            self.dealer.hand_mut().add(card);
            log::trace!("dealer draws: {} ({})", card, self.dealer.hand().sum());
        }
        Ok(())
    }

    fn settle(&mut self, dealer_blackjack: bool) -> RoundReport {
        let dealer_total = self.dealer.hand().sum();
        let seats = self
            .players
            .iter_mut()
            .map(|player| {
                let total = player.hand().sum();
                let outcome = settle_seat(dealer_total, total);
                player.record_outcome(outcome);
                SeatResult { name: player.name().to_string(), total, outcome }
            })
            .collect();
        log::debug!("round resolved, dealer total {dealer_total}");
        RoundReport { dealer_total, dealer_blackjack, seats }
    }
}

/// Outcome of one seat against the dealer's final total.
///
/// When the dealer busts only seats strictly under 21 win; a seat holding
/// exactly 21 loses in that case.
pub fn settle_seat(dealer_total: u32, total: u32) -> Outcome {
    if dealer_total == 21 {
        if total == 21 {
            Outcome::Draw
        } else {
            Outcome::Loss
        }
    } else if dealer_total < 21 {
        if total > 21 || total < dealer_total {
            Outcome::Loss
        } else if total > dealer_total {
            Outcome::Win
        } else {
            Outcome::Draw
        }
    } else if total < 21 {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}
