//! Optimal play: full-depth minimax with alpha-beta pruning.
//!
//! Scores are from the AI's point of view: `10 - depth` for an AI win,
//! `depth - 10` for an opponent win, `0` for a full board. Depth counts plies
//! below the candidate move, so quicker wins and slower losses score higher.
//!
//! The look-ahead never evicts. A full board without a line scores as a draw
//! even though live infinite play never stays full.

use super::hypothetical::Hypothetical;
use super::{MoveSelector, Strategy};
use crate::error::SelectError;
use crate::rules::{is_full, winner};
use crate::types::{Board, Mark};
use tracing::{debug, instrument};

/// Score of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// Statistics from one root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Chosen index.
    pub index: usize,
    /// Minimax value of the chosen move.
    pub score: i32,
    /// Positions visited.
    pub nodes: u64,
}

struct Search {
    ai: Mark,
    opponent: Mark,
    nodes: u64,
}

impl Search {
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if let Some(mark) = winner(board) {
            return if mark == self.ai {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
        if is_full(board) {
            return 0;
        }

        let mark = if maximizing { self.ai } else { self.opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in board.empty_cells() {
            let score = {
                let mut probe = Hypothetical::place(board, index, mark);
                self.minimax(&mut probe, depth + 1, !maximizing, alpha, beta)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

/// Runs a root search and reports statistics alongside the move.
///
/// Each empty square is tried in index order with a fresh window; the first
/// strictly greater score wins ties.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board, ai: Mark, opponent: Mark) -> Result<SearchStats, SelectError> {
    let mut scratch = *board;
    let mut search = Search {
        ai,
        opponent,
        nodes: 0,
    };
    let mut best: Option<(usize, i32)> = None;

    for index in scratch.empty_cells() {
        let score = {
            let mut probe = Hypothetical::place(&mut scratch, index, ai);
            search.minimax(&mut probe, 0, false, i32::MIN, i32::MAX)
        };
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    debug_assert_eq!(&scratch, board, "look-ahead leaked a mark");

    let (index, score) = best.ok_or(SelectError::NoEmptyCells)?;
    debug!(index, score, nodes = search.nodes, "Minimax chose move");
    Ok(SearchStats {
        index,
        score,
        nodes: search.nodes,
    })
}

/// Picks the optimal move for `ai`.
///
/// # Errors
///
/// [`SelectError::NoEmptyCells`] if the board is full.
pub fn best_move(board: &Board, ai: Mark, opponent: Mark) -> Result<usize, SelectError> {
    search(board, ai, opponent).map(|stats| stats.index)
}

/// [`MoveSelector`] backed by [`best_move`].
#[derive(Debug, Clone, Default)]
pub struct MinimaxSelector {
    last_search: Option<SearchStats>,
}

impl MinimaxSelector {
    /// Creates a selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics from the most recent successful search.
    pub fn last_search(&self) -> Option<SearchStats> {
        self.last_search
    }
}

impl MoveSelector for MinimaxSelector {
    fn select_move(&mut self, board: &Board, ai: Mark, opponent: Mark) -> Result<usize, SelectError> {
        let stats = search(board, ai, opponent)?;
        self.last_search = Some(stats);
        Ok(stats.index)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        // O to move can finish the middle row at 5.
        let stats = search(&board("XX.OO.X.."), Mark::O, Mark::X).unwrap();
        assert_eq!(stats.index, 5);
        assert_eq!(stats.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_forced_loss() {
        // X threatens 0-1-2; O has nothing faster, so it must block at 2.
        assert_eq!(best_move(&board("XX..O...."), Mark::O, Mark::X), Ok(2));
    }

    #[test]
    fn test_prefers_faster_win() {
        // X can win now at 2 or set up a later win; the immediate one scores higher.
        let stats = search(&board("XX.OO...."), Mark::X, Mark::O).unwrap();
        assert_eq!(stats.index, 2);
        assert_eq!(stats.score, WIN_SCORE);
    }

    #[test]
    fn test_opening_is_corner_or_center() {
        let index = best_move(&Board::new(), Mark::O, Mark::X).unwrap();
        assert!([0, 2, 4, 6, 8].contains(&index), "opened at {index}");
    }

    #[test]
    fn test_empty_board_scores_draw() {
        let stats = search(&Board::new(), Mark::X, Mark::O).unwrap();
        assert_eq!(stats.score, 0);
        assert!(stats.nodes > 0);
    }

    #[test]
    fn test_full_board_is_an_error() {
        assert_eq!(
            best_move(&board("XOXXOOOXX"), Mark::X, Mark::O),
            Err(SelectError::NoEmptyCells)
        );
    }

    #[test]
    fn test_selector_records_last_search() {
        let mut selector = MinimaxSelector::new();
        assert_eq!(selector.last_search(), None);
        let index = selector
            .select_move(&board("XX..O...."), Mark::O, Mark::X)
            .unwrap();
        assert_eq!(selector.last_search().map(|stats| stats.index), Some(index));
        assert_eq!(selector.strategy(), Strategy::Optimal);
    }
}
