//! Terminal front-end for infinite tic-tac-toe.
//!
//! Seats two [`players::Player`]s, runs them through an
//! [`orchestrator::Orchestrator`], and prints the [`orchestrator::GameEvent`]s
//! it emits.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod players;
pub mod render;
pub mod score_file;

pub use config::{ConfigError, GameConfig, GameMode};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{AiPlayer, HumanPlayer, Player, PlayerType, Turn};
pub use score_file::{ScoreFile, ScoreFileError};
