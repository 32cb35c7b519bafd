//! Error types for the board engine and move selectors.

use derive_more::Display;

/// A move the engine refused. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the index already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(usize),
}

impl std::error::Error for MoveError {}

/// A selector was asked for a move it cannot make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SelectError {
    /// The board has no empty square. Callers check the outcome first.
    #[display("No empty square to move into")]
    NoEmptyCells,
}

impl std::error::Error for SelectError {}
