//! AI move selection.
//!
//! Three strategies share one capability, [`MoveSelector`]: given a board
//! snapshot and the two marks, return the index to play. Every strategy
//! works on a private copy of the snapshot, so the caller's board is never
//! touched.

mod heuristic;
mod hypothetical;
mod minimax;
mod random;

pub use heuristic::{HeuristicSelector, medium_move};
pub use minimax::{MinimaxSelector, SearchStats, WIN_SCORE, best_move, search};
pub use random::{RandomSelector, random_move};

use crate::error::SelectError;
use crate::types::{Board, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Picks a move index for a board.
pub trait MoveSelector {
    /// Chooses an empty square for `ai` to play against `opponent`.
    ///
    /// # Errors
    ///
    /// [`SelectError::NoEmptyCells`] if the board is full.
    fn select_move(&mut self, board: &Board, ai: Mark, opponent: Mark) -> Result<usize, SelectError>;

    /// Which strategy this selector implements.
    fn strategy(&self) -> Strategy;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select_move(&mut self, board: &Board, ai: Mark, opponent: Mark) -> Result<usize, SelectError> {
        (**self).select_move(board, ai, opponent)
    }

    fn strategy(&self) -> Strategy {
        (**self).strategy()
    }
}

/// AI strategy, as chosen in configuration.
///
/// Parses from `optimal`/`heuristic`/`random` or the difficulty names
/// `hard`/`medium`/`easy`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Minimax with alpha-beta pruning.
    #[default]
    #[serde(alias = "hard")]
    #[strum(to_string = "optimal", serialize = "hard")]
    Optimal,
    /// Win if possible, block if necessary, otherwise random.
    #[serde(alias = "medium")]
    #[strum(to_string = "heuristic", serialize = "medium")]
    Heuristic,
    /// Uniformly random empty square.
    #[serde(alias = "easy")]
    #[strum(to_string = "random", serialize = "easy")]
    Random,
}

impl Strategy {
    /// Builds a selector. With a seed, random choices are reproducible.
    #[instrument]
    pub fn selector(self, seed: Option<u64>) -> Box<dyn MoveSelector + Send> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        match self {
            Strategy::Optimal => Box::new(MinimaxSelector::new()),
            Strategy::Heuristic => Box::new(HeuristicSelector::new(rng)),
            Strategy::Random => Box::new(RandomSelector::new(rng)),
        }
    }
}
