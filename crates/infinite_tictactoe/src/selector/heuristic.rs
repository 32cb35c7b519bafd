//! Block-or-win heuristic.

use super::hypothetical::Hypothetical;
use super::random::random_move;
use super::{MoveSelector, Strategy};
use crate::error::SelectError;
use crate::rules::has_line;
use crate::types::{Board, Mark};
use rand::Rng;
use tracing::{debug, instrument};

/// First empty square (index order) where `mark` would complete a line.
fn completing_move(board: &mut Board, mark: Mark) -> Option<usize> {
    board.empty_cells().into_iter().find(|&index| {
        let probe = Hypothetical::place(board, index, mark);
        has_line(&probe, mark)
    })
}

/// Wins if it can, blocks if it must, otherwise plays at random.
///
/// # Errors
///
/// [`SelectError::NoEmptyCells`] if the board is full.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn medium_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Result<usize, SelectError> {
    let mut scratch = *board;

    if let Some(index) = completing_move(&mut scratch, ai) {
        debug!(index, "Heuristic completes a line");
        return Ok(index);
    }
    if let Some(index) = completing_move(&mut scratch, opponent) {
        debug!(index, "Heuristic blocks a line");
        return Ok(index);
    }
    random_move(board, rng)
}

/// [`MoveSelector`] backed by [`medium_move`].
#[derive(Debug, Clone)]
pub struct HeuristicSelector<R> {
    rng: R,
}

impl<R: Rng> HeuristicSelector<R> {
    /// Creates a selector drawing fallback moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for HeuristicSelector<R> {
    fn select_move(&mut self, board: &Board, ai: Mark, opponent: Mark) -> Result<usize, SelectError> {
        medium_move(board, ai, opponent, &mut self.rng)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Heuristic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_win_checked_before_block() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(medium_move(&board("XX.OO...."), Mark::O, Mark::X, &mut rng), Ok(5));
    }

    #[test]
    fn test_blocks_opponent_line() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(medium_move(&board("X...X..O."), Mark::O, Mark::X, &mut rng), Ok(8));
    }

    #[test]
    fn test_lowest_index_win_first() {
        // O can finish row 1 at 5, column 0 at 6 or the diagonal at 8.
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(medium_move(&board("OXXOO..X."), Mark::O, Mark::X, &mut rng), Ok(5));
    }

    #[test]
    fn test_falls_back_to_empty_square() {
        let mut rng = StdRng::seed_from_u64(11);
        let start = board("X.......O");
        let index = medium_move(&start, Mark::O, Mark::X, &mut rng).unwrap();
        assert!(start.is_empty(index));
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut selector = HeuristicSelector::new(StdRng::seed_from_u64(1));
        assert_eq!(
            selector.select_move(&board("XOXXOOOXX"), Mark::O, Mark::X),
            Err(SelectError::NoEmptyCells)
        );
    }
}
