//! Infinite tic-tac-toe: the decision engine.
//!
//! Plain tic-tac-toe on a 3x3 board with one twist: once nine marks are
//! down, every new move evicts the oldest mark, so a game can run forever
//! instead of filling up into a draw.
//!
//! # Architecture
//!
//! - **[`BoardEngine`]**: owns the board, the move history and the eviction
//!   rule for one game session.
//! - **Rules**: pure win/draw detection over a [`Board`], shared by the
//!   engine and the selectors' look-ahead.
//! - **[`MoveSelector`]**: the AI opponent. Minimax with alpha-beta pruning
//!   ([`best_move`]), block-or-win ([`medium_move`]) or uniform random
//!   ([`random_move`]), chosen through [`Strategy`].
//!
//! # Example
//!
//! ```
//! use infinite_tictactoe::{BoardEngine, Mark, Outcome, best_move};
//!
//! let mut engine = BoardEngine::new();
//! engine.apply_move(4, Mark::X)?;
//!
//! let reply = best_move(&engine.playable_board(), Mark::O, Mark::X)?;
//! engine.apply_move(reply, Mark::O)?;
//!
//! assert_eq!(engine.check_outcome(), Outcome::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod history;
mod invariants;
mod position;
pub mod rules;
mod score;
mod selector;
mod types;

pub use engine::{BoardEngine, Placement, Variant};
pub use error::{MoveError, SelectError};
pub use history::{HISTORY_CAPACITY, MoveHistory, MoveRecord};
pub use invariants::{
    EngineInvariants, HistoryBoundedInvariant, HistoryConsistentInvariant,
    HistoryMatchesBoardInvariant, Invariant, InvariantSet, InvariantViolation,
};
pub use position::Position;
pub use rules::{Line, Outcome, WINNING_LINES, check_outcome};
pub use score::Scoreboard;
pub use selector::{
    HeuristicSelector, MinimaxSelector, MoveSelector, RandomSelector, SearchStats, Strategy,
    WIN_SCORE, best_move, medium_move, random_move, search,
};
pub use types::{BOARD_CELLS, Board, BoardParseError, Mark, Square};
