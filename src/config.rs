use crate::deck::Deck;

/// Per-round setup: where the cards come from and how they are shuffled.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RoundConfig {
    /// Seed for the round RNG; drawn from the thread RNG when `None`.
    pub rng_seed: Option<u64>,
    pub shuffle: bool,
    /// Deal from this deck instead of a fresh standard one.
    pub stacked_deck: Option<Deck>,
}

impl RoundConfig {
    /// Set a deterministic RNG seed for reproducible shuffles.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Deal the standard deck in construction order.
    pub fn unshuffled(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Deal `deck` front to back, unshuffled.
    pub fn with_stacked_deck(mut self, deck: Deck) -> Self {
        self.stacked_deck = Some(deck);
        self.shuffle = false;
        self
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self { rng_seed: None, shuffle: true, stacked_deck: None }
    }
}

/// Setup for a run of many rounds over the same players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct SimConfig {
    pub rounds: u32,
    /// Master seed; every round's shuffle seed is derived from it.
    pub rng_seed: Option<u64>,
}

impl SimConfig {
    pub fn new(rounds: u32) -> Self {
        Self { rounds, rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(1000)
    }
}
