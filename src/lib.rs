//! blackjack-rs: Blackjack round engine and simulator
//!
//! Goals:
//! - One round at a time: deal, dealer blackjack check, strategy-driven seat
//!   turns, dealer draws to 17, settlement
//! - Pluggable seat strategies; the dealer policy is fixed
//! - Reproducible runs through seeded shuffles
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: score a hand
//! ```
//! use blackjack_rs::cards::parse_cards;
//! use blackjack_rs::hand::Hand;
//!
//! let hand = Hand::from_cards(parse_cards("a of diamonds, a of spades, 9 of hearts").unwrap());
//! assert_eq!(hand.sum(), 21);
//! ```
//!
//! ## Quick start: run many rounds
//! ```
//! use blackjack_rs::config::SimConfig;
//! use blackjack_rs::player::Player;
//! use blackjack_rs::sim::Simulation;
//! use blackjack_rs::strategy::{HitOnce, HoldAt};
//!
//! let mut players = vec![Player::new("John", HoldAt(17)), Player::new("Paul", HitOnce)];
//! let report = Simulation::new(SimConfig::new(100).with_seed(7)).run(&mut players).unwrap();
//! assert_eq!(report.records[0].1.rounds(), 100);
//! ```
//!
//! ## CLI
//! Run the simulator with:
//! ```sh
//! cargo run --bin blackjack-sim -- --rounds 1000 --player John=hold-at-17 --player Paul=hit-once
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod game;
pub mod hand;
pub mod player;
pub mod sim;
pub mod strategy;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
