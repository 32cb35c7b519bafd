//! Computer player backed by a move selector.

use super::{Player, PlayerType, Turn};
use anyhow::Result;
use infinite_tictactoe::{BoardEngine, Mark, MoveSelector};
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer opponent.
///
/// Waits `delay` before choosing so turns feel paced, then asks its
/// selector about the board the next mover will actually see.
pub struct AiPlayer {
    name: String,
    selector: Box<dyn MoveSelector + Send>,
    delay: Duration,
}

impl AiPlayer {
    /// Creates a computer player.
    pub fn new(
        name: impl Into<String>,
        selector: Box<dyn MoveSelector + Send>,
        delay: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            selector,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for AiPlayer {
    #[instrument(skip_all, fields(%mark))]
    async fn next_turn(&mut self, engine: &BoardEngine, mark: Mark) -> Result<Turn> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let board = engine.playable_board();
        let index = self.selector.select_move(&board, mark, mark.opponent())?;
        debug!(ai = %self.name, strategy = %self.selector.strategy(), index, "AI chose position");
        Ok(Turn::Place(index))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn player_type(&self) -> PlayerType {
        PlayerType::Ai
    }
}
