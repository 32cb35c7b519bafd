//! Player trait and implementations.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::{HumanPlayer, InputLines, shared_lines, stdin_lines};

use crate::config::{GameConfig, GameMode};
use anyhow::Result;
use infinite_tictactoe::{BoardEngine, Mark};
use tracing::instrument;

/// What a player decided to do on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Play the square at this index.
    Place(usize),
    /// Input that named no square.
    Unrecognised(String),
    /// Leave the game.
    Quit,
}

/// Kind of player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    /// Person at the terminal.
    Human,
    /// Computer opponent.
    Ai,
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Decides the next turn for `mark`.
    async fn next_turn(&mut self, engine: &BoardEngine, mark: Mark) -> Result<Turn>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the kind of player.
    fn player_type(&self) -> PlayerType;
}

/// Seats the players for `config`, X first.
#[instrument(skip(input))]
pub fn lineup(config: &GameConfig, input: InputLines) -> (Box<dyn Player>, Box<dyn Player>) {
    match config.mode() {
        GameMode::HumanVsHuman => (
            Box::new(HumanPlayer::new("Player X", input.clone())),
            Box::new(HumanPlayer::new("Player O", input)),
        ),
        GameMode::HumanVsAi => {
            let ai: Box<dyn Player> = Box::new(AiPlayer::new(
                format!("Computer ({})", config.strategy()),
                config.strategy().selector(*config.seed()),
                config.ai_delay(),
            ));
            let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", input));
            match config.ai_mark() {
                Mark::X => (ai, human),
                Mark::O => (human, ai),
            }
        }
    }
}
