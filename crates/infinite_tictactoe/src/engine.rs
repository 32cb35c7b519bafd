//! The board engine: board, move history and the eviction rule.

use super::error::MoveError;
use super::history::{MoveHistory, MoveRecord};
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use super::rules::{self, Outcome};
use super::types::{BOARD_CELLS, Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Whether the engine evicts old marks.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Variant {
    /// Once nine marks are down, each move evicts the oldest one.
    #[default]
    Infinite,
    /// Plain tic-tac-toe: a full board without a line is a draw.
    Classic,
}

/// What [`BoardEngine::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Index written, always the requested one.
    pub index: usize,
    /// Mark written.
    pub mark: Mark,
    /// Record removed to make room, if the history was full.
    pub evicted: Option<MoveRecord>,
}

/// Owns one game's board and move history.
///
/// In [`Variant::Infinite`] the board holds at most nine marks. When the
/// history is full, the oldest mark is cleared before the new one is
/// written, so the square it frees is a legal target for the incoming move.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardEngine {
    board: Board,
    history: MoveHistory,
    variant: Variant,
    moves_made: u64,
}

impl BoardEngine {
    /// Creates an engine for the infinite variant.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine for the given variant.
    #[instrument]
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, records: Vec<MoveRecord>) -> Self {
        let mut history = MoveHistory::new();
        records.into_iter().for_each(|record| history.push(record));
        Self {
            board,
            history,
            variant: Variant::Infinite,
            moves_made: 0,
        }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marks still on the board, oldest first.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The eviction variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Successful moves since the last reset, evicted ones included.
    pub fn moves_made(&self) -> u64 {
        self.moves_made
    }

    /// The record the next move will evict, if any.
    pub fn next_eviction(&self) -> Option<MoveRecord> {
        match self.variant {
            Variant::Infinite if self.history.is_full() => self.history.head().copied(),
            _ => None,
        }
    }

    /// The board as the next mover sees it: the pending eviction applied.
    ///
    /// Move selectors take this snapshot so the freed square is playable.
    pub fn playable_board(&self) -> Board {
        let mut board = self.board;
        if let Some(record) = self.next_eviction() {
            board.set(record.index, Square::Empty);
        }
        board
    }

    /// Indices the next move may target, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.playable_board().empty_cells()
    }

    /// Places `mark` at `index`, evicting the oldest mark first when the
    /// history is full.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] if `index > 8`, [`MoveError::CellOccupied`]
    /// if the square holds a mark that is not about to be evicted. The engine
    /// is unchanged on error.
    #[instrument(skip(self), fields(variant = %self.variant, history = self.history.len()))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<Placement, MoveError> {
        if index >= BOARD_CELLS {
            warn!(index, "Rejected out-of-bounds move");
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.playable_board().is_empty(index) {
            warn!(index, "Rejected move onto occupied square");
            return Err(MoveError::CellOccupied(index));
        }

        let evicted = self.evict_oldest();
        self.board.set(index, Square::Occupied(mark));
        self.history.push(MoveRecord::new(index, mark));
        self.moves_made += 1;

        debug!(index, %mark, evicted = ?evicted, board = %self.board, "Move applied");
        debug_assert!(
            self.check_invariants().is_ok(),
            "Engine invariants violated: {:?}",
            self.check_invariants()
        );

        Ok(Placement {
            index,
            mark,
            evicted,
        })
    }

    fn evict_oldest(&mut self) -> Option<MoveRecord> {
        self.next_eviction()?;
        let record = self.history.pop_oldest()?;
        self.board.set(record.index, Square::Empty);
        debug!(index = record.index, mark = %record.mark, "Evicted oldest mark");
        Some(record)
    }

    /// Evaluates the live board.
    ///
    /// A full board is only a draw when no eviction is pending. In the
    /// infinite variant the next move frees the oldest square, so play goes on.
    #[instrument(skip(self))]
    pub fn check_outcome(&self) -> Outcome {
        match rules::check_outcome(&self.board) {
            Outcome::Draw if self.next_eviction().is_some() => Outcome::InProgress,
            outcome => outcome,
        }
    }

    /// Clears the board and history.
    #[instrument(skip(self), fields(moves_made = self.moves_made))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.board = Board::new();
        self.history.clear();
        self.moves_made = 0;
    }

    /// Index of the oldest mark once at least eight are down, so the
    /// front-end can warn that it is about to disappear.
    pub fn oldest_index(&self) -> Option<usize> {
        if self.variant == Variant::Infinite && self.history.len() >= 8 {
            self.history.head().map(|record| record.index)
        } else {
            None
        }
    }

    /// Checks every engine invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        EngineInvariants::check_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nine moves with no line: X O X / X O O / O X X, played in an order
    /// that never completes a line along the way.
    const DRAWN_SEQUENCE: [(usize, Mark); 9] = [
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (4, Mark::O),
        (3, Mark::X),
        (5, Mark::O),
        (7, Mark::X),
        (6, Mark::O),
        (8, Mark::X),
    ];

    fn play(engine: &mut BoardEngine, moves: &[(usize, Mark)]) {
        for &(index, mark) in moves {
            engine.apply_move(index, mark).unwrap();
        }
    }

    #[test]
    fn test_apply_writes_mark() {
        let mut engine = BoardEngine::new();
        let placement = engine.apply_move(4, Mark::X).unwrap();
        assert_eq!(
            placement,
            Placement {
                index: 4,
                mark: Mark::X,
                evicted: None
            }
        );
        assert_eq!(engine.board().get(4), Some(Square::Occupied(Mark::X)));
        assert_eq!(engine.moves_made(), 1);
    }

    #[test]
    fn test_occupied_square_rejected_and_board_unchanged() {
        let mut engine = BoardEngine::new();
        engine.apply_move(4, Mark::X).unwrap();
        let before = engine.clone();

        assert_eq!(engine.apply_move(4, Mark::O), Err(MoveError::CellOccupied(4)));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = BoardEngine::new();
        assert_eq!(engine.apply_move(9, Mark::X), Err(MoveError::OutOfBounds(9)));
        assert_eq!(engine.moves_made(), 0);
    }

    #[test]
    fn test_tenth_move_evicts_first() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &DRAWN_SEQUENCE);
        assert_eq!(engine.board().occupied_count(), 9);
        assert_eq!(engine.next_eviction(), Some(MoveRecord::new(0, Mark::X)));
        assert_eq!(engine.legal_moves(), vec![0]);

        let placement = engine.apply_move(0, Mark::O).unwrap();
        assert_eq!(placement.evicted, Some(MoveRecord::new(0, Mark::X)));
        assert_eq!(engine.history().head(), Some(&MoveRecord::new(1, Mark::O)));
        assert_eq!(engine.history().len(), 9);
        assert_eq!(engine.board().get(0), Some(Square::Occupied(Mark::O)));
        assert_eq!(engine.moves_made(), 10);
    }

    #[test]
    fn test_playable_board_frees_evicted_square() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &DRAWN_SEQUENCE);
        let playable = engine.playable_board();
        assert_eq!(playable.get(0), Some(Square::Empty));
        assert_eq!(playable.occupied_count(), 8);
        // The live board still shows the mark until the move lands.
        assert_eq!(engine.board().get(0), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_eviction_is_fifo_across_many_moves() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &DRAWN_SEQUENCE);
        let mut mark = Mark::O;
        for expected in DRAWN_SEQUENCE {
            let index = engine.next_eviction().unwrap().index;
            let placement = engine.apply_move(index, mark).unwrap();
            assert_eq!(placement.evicted, Some(MoveRecord::new(expected.0, expected.1)));
            mark = mark.opponent();
        }
        assert!(engine.check_invariants().is_ok());
    }

    #[test]
    fn test_full_infinite_board_is_not_a_draw() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &DRAWN_SEQUENCE);
        assert!(rules::is_full(engine.board()));
        assert_eq!(engine.check_outcome(), Outcome::InProgress);
        assert_eq!(rules::check_outcome(engine.board()), Outcome::Draw);
    }

    #[test]
    fn test_classic_variant_never_evicts() {
        let mut engine = BoardEngine::with_variant(Variant::Classic);
        play(&mut engine, &DRAWN_SEQUENCE);
        assert_eq!(engine.check_outcome(), Outcome::Draw);
        assert_eq!(engine.next_eviction(), None);
        assert!(engine.legal_moves().is_empty());
        assert_eq!(engine.apply_move(0, Mark::O), Err(MoveError::CellOccupied(0)));
        assert_eq!(engine.oldest_index(), None);
    }

    #[test]
    fn test_oldest_index_from_eighth_move() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &DRAWN_SEQUENCE[..7]);
        assert_eq!(engine.oldest_index(), None);
        play(&mut engine, &DRAWN_SEQUENCE[7..8]);
        assert_eq!(engine.oldest_index(), Some(0));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &DRAWN_SEQUENCE[..4]);
        engine.reset();
        assert_eq!(engine.board(), &Board::new());
        assert!(engine.history().is_empty());
        assert_eq!(engine.moves_made(), 0);
        assert_eq!(engine.check_outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_check_outcome_reports_win() {
        let mut engine = BoardEngine::new();
        play(
            &mut engine,
            &[(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)],
        );
        assert_eq!(
            engine.check_outcome(),
            Outcome::Win {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
    }
}
