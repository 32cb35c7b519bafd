//! Scoped look-ahead placement.

use crate::types::{Board, Mark, Square};
use std::ops::{Deref, DerefMut};

/// A mark written into a scratch board for the lifetime of the guard.
///
/// Dropping the guard clears the square again, so every exit path of a
/// search (pruning breaks and early returns included) leaves the board as
/// it found it.
pub(crate) struct Hypothetical<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Hypothetical<'a> {
    /// Writes `mark` at `index`, which must be empty.
    pub(crate) fn place(board: &'a mut Board, index: usize, mark: Mark) -> Self {
        debug_assert!(board.is_empty(index), "look-ahead onto occupied square {index}");
        board.set(index, Square::Occupied(mark));
        Self { board, index }
    }
}

impl Deref for Hypothetical<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.board.set(self.index, Square::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_square() {
        let mut board = Board::new();
        {
            let probe = Hypothetical::place(&mut board, 4, Mark::X);
            assert_eq!(probe.get(4), Some(Square::Occupied(Mark::X)));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_nested_guards_unwind_in_order() {
        let mut board: Board = "O........".parse().unwrap();
        {
            let mut outer = Hypothetical::place(&mut board, 4, Mark::X);
            let inner = Hypothetical::place(&mut outer, 8, Mark::O);
            assert_eq!(inner.to_string(), "O...X...O");
        }
        assert_eq!(board.to_string(), "O........");
    }
}
