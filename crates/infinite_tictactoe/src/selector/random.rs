//! Uniform random play.

use super::{MoveSelector, Strategy};
use crate::error::SelectError;
use crate::types::{Board, Mark};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks an empty square uniformly at random.
///
/// # Errors
///
/// [`SelectError::NoEmptyCells`] if the board is full.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, SelectError> {
    board
        .empty_cells()
        .choose(rng)
        .copied()
        .ok_or(SelectError::NoEmptyCells)
}

/// [`MoveSelector`] backed by [`random_move`].
#[derive(Debug, Clone)]
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    /// Creates a selector drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for RandomSelector<R> {
    fn select_move(&mut self, board: &Board, _ai: Mark, _opponent: Mark) -> Result<usize, SelectError> {
        random_move(board, &mut self.rng)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Random
    }
}
