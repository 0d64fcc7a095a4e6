//! Repeated rounds over the same players.
//!
//! Each round is a fresh [`BlackJack`] with a fresh deck; only the players
//! (and so their records) carry over. Round seeds come from one master RNG,
//! so a seeded run replays exactly.

use crate::config::{RoundConfig, SimConfig};
use crate::game::{BlackJack, GameError};
use crate::player::{Player, Record};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Records of every player after a run, in seating order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimReport {
    pub rounds: u32,
    pub records: Vec<(String, Record)>,
}

#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    rng: ChaCha8Rng,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        let seed = config.rng_seed.unwrap_or_else(|| rand::rng().random());
        Self { config, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Play `config.rounds` rounds, deal then play, stopping at the first error.
    pub fn run(&mut self, players: &mut [Player]) -> Result<SimReport, GameError> {
        log::info!("simulating {} round(s) with {} seat(s)", self.config.rounds, players.len());
        for _ in 0..self.config.rounds {
            let round = RoundConfig::default().with_seed(self.rng.random());
            let mut game = BlackJack::with_config(players.iter_mut(), round);
            game.deal()?;
            game.play()?;
        }
        let records: Vec<(String, Record)> =
            players.iter().map(|p| (p.name().to_string(), *p.record())).collect();
        for (name, record) in &records {
            log::info!(
                "{name}: {} win(s), {} draw(s), {} loss(es)",
                record.wins(),
                record.draws(),
                record.losses()
            );
        }
        Ok(SimReport { rounds: self.config.rounds, records })
    }
}
