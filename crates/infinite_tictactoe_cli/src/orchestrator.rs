//! Game orchestration between players.

use crate::players::{Player, PlayerType, Turn};
use anyhow::Result;
use infinite_tictactoe::{Board, BoardEngine, Mark, MoveError, Outcome, Placement, Variant};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Free text from the session, such as a round banner.
    Notice(String),
    /// Board updated. `fading` is the square the eviction rule will clear
    /// soon, when there is one.
    BoardChanged {
        /// The live board.
        board: Board,
        /// Oldest mark once eight or more are down.
        fading: Option<usize>,
    },
    /// A player is on the move.
    Turn {
        /// Player name.
        player: String,
        /// Mark they play.
        mark: Mark,
        /// Human or computer.
        player_type: PlayerType,
    },
    /// Move was made.
    MoveMade {
        /// Player name.
        player: String,
        /// What the engine did.
        placement: Placement,
    },
    /// The engine refused a move; the same player goes again.
    MoveRejected {
        /// Player name.
        player: String,
        /// Why the move was refused.
        error: MoveError,
    },
    /// Input that named no square; the same player goes again.
    Unrecognised {
        /// Player name.
        player: String,
        /// What they typed.
        input: String,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Winning player's name.
        winner: Option<String>,
    },
    /// A player left.
    Quit {
        /// Player name.
        player: String,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    engine: BoardEngine,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    to_move: Mark,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator. X moves first.
    pub fn new(
        variant: Variant,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            engine: BoardEngine::with_variant(variant),
            player_x,
            player_o,
            to_move: Mark::X,
            event_tx,
        }
    }

    /// The engine of the game in progress.
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// Runs the game loop until a win, a draw, or a player quits.
    ///
    /// Returns the final outcome, [`Outcome::InProgress`] if someone quit.
    #[instrument(skip(self), fields(variant = %self.engine.variant()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");
        self.send_board()?;

        loop {
            let outcome = self.engine.check_outcome();
            if outcome.is_over() {
                let winner = outcome
                    .winner()
                    .map(|mark| self.player(mark).name().to_string());
                info!(?outcome, ?winner, moves = self.engine.moves_made(), "Game over");
                self.event_tx.send(GameEvent::GameOver { outcome, winner })?;
                return Ok(outcome);
            }

            let mark = self.to_move;
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = player.name().to_string();

            self.event_tx.send(GameEvent::Turn {
                player: name.clone(),
                mark,
                player_type: player.player_type(),
            })?;

            debug!(player = %name, %mark, "Waiting for move");
            match player.next_turn(&self.engine, mark).await? {
                Turn::Quit => {
                    info!(player = %name, "Player quit");
                    self.event_tx.send(GameEvent::Quit { player: name })?;
                    return Ok(Outcome::InProgress);
                }
                Turn::Unrecognised(input) => {
                    debug!(player = %name, %input, "Unrecognised input");
                    self.event_tx
                        .send(GameEvent::Unrecognised { player: name, input })?;
                }
                Turn::Place(index) => match self.engine.apply_move(index, mark) {
                    Ok(placement) => {
                        self.event_tx.send(GameEvent::MoveMade {
                            player: name,
                            placement,
                        })?;
                        self.send_board()?;
                        self.to_move = mark.opponent();
                    }
                    Err(error) => {
                        warn!(player = %name, %error, "Move rejected");
                        self.event_tx
                            .send(GameEvent::MoveRejected { player: name, error })?;
                    }
                },
            }
        }
    }

    /// Restarts the game with the same players and variant.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.to_move = Mark::X;
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    fn send_board(&self) -> Result<()> {
        self.event_tx.send(GameEvent::BoardChanged {
            board: *self.engine.board(),
            fading: self.engine.oldest_index(),
        })?;
        Ok(())
    }
}
