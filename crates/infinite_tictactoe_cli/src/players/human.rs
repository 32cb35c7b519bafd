//! Human player reading squares from a line-oriented input.

use super::{Player, PlayerType, Turn};
use anyhow::Result;
use infinite_tictactoe::{BoardEngine, Mark, Position};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Line input shared by every human at the terminal.
pub type InputLines = Arc<Mutex<Lines<Box<dyn AsyncBufRead + Unpin + Send>>>>;

/// Wraps any buffered reader as shared input.
pub fn shared_lines<R>(reader: R) -> InputLines
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let reader: Box<dyn AsyncBufRead + Unpin + Send> = Box::new(reader);
    Arc::new(Mutex::new(reader.lines()))
}

/// Shared input over standard input.
pub fn stdin_lines() -> InputLines {
    shared_lines(BufReader::new(tokio::io::stdin()))
}

/// A person typing an index (0-8), a position name, or `q` to quit.
pub struct HumanPlayer {
    name: String,
    input: InputLines,
}

impl HumanPlayer {
    /// Creates a human player.
    pub fn new(name: impl Into<String>, input: InputLines) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip_all)]
    async fn next_turn(&mut self, _engine: &BoardEngine, mark: Mark) -> Result<Turn> {
        let line = self.input.lock().await.next_line().await?;
        let Some(line) = line else {
            debug!("Input closed");
            return Ok(Turn::Quit);
        };

        let input = line.trim();
        debug!(%mark, input, "Read input");
        if matches!(input.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
            return Ok(Turn::Quit);
        }
        Ok(match Position::from_label_or_number(input) {
            Some(position) => Turn::Place(position.to_index()),
            None => Turn::Unrecognised(input.to_string()),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn player_type(&self) -> PlayerType {
        PlayerType::Human
    }
}
