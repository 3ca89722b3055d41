//! Tabular TD(0) learning for tic-tac-toe.
//!
//! Two agents, one per symbol, each keep a value for every possible board and
//! learn those values by playing each other. Every board is identified by a
//! base-3 [`StateId`](board::StateId), the value tables start from an exhaustive
//! enumeration of all `3^9` grids, moves are epsilon-greedy over the table, and
//! after each game the agents run a backward TD(0) pass over the states they saw.
//!
//! # Example
//!
//! ```rust
//! use td_tictactoe::config::TrainingConfig;
//! use td_tictactoe::random::SeededRandomGenerator;
//! use td_tictactoe::training::{build_agents, train};
//!
//! let config = TrainingConfig {
//!     games: 500,
//!     seed: Some(7),
//!     ..TrainingConfig::default()
//! };
//!
//! // Initial value tables come from the full state enumeration
//! let (mut agent_x, mut agent_o) = build_agents(&config);
//!
//! // Self-play, with all randomness drawn from one seeded generator
//! let mut rng = SeededRandomGenerator::from_optional_seed(config.seed);
//! let summary = train(&mut agent_x, &mut agent_o, &config, &mut rng).unwrap();
//!
//! assert_eq!(summary.games, 500);
//! ```

/// The epsilon-greedy TD(0) agent.
pub mod agent;
/// The 3x3 board, its symbols and the state encoding.
pub mod board;
/// Training settings and their validation.
pub mod config;
/// Text rendering of boards and value grids.
pub mod display;
/// Exhaustive enumeration of every grid assignment.
pub mod enumerator;
/// Crate error type.
pub mod error;
/// The loop that plays one game between two participants.
pub mod game;
/// A person entering moves on a text prompt.
pub mod human;
/// The closed set of things that can make moves.
pub mod participant;
/// Traits and implementations for random number generation.
pub mod random;
/// Self-play training of a pair of agents.
pub mod training;
/// Per-agent state values and their initialisation.
pub mod value_table;

pub use error::{Error, Result};
