//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};

/// Three board indices that win when filled by one mark.
pub type Line = [usize; 3];

/// The eight winning lines: rows top-to-bottom, columns left-to-right,
/// then the two diagonals. Scans use this order as the tie-break.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first complete line and the mark filling it.
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    WINNING_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Some(Square::Occupied(mark))
                if board.get(b) == Some(Square::Occupied(mark))
                    && board.get(c) == Some(Square::Occupied(mark)) =>
            {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Returns the mark of the first complete line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Checks whether `mark` fills any line, regardless of the other mark.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let target = Some(Square::Occupied(mark));
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX......".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Mark::X, [0, 1, 2])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..O.O.O..".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Mark::O, [2, 4, 6])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.......".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_enumeration_order_breaks_ties() {
        // Row 0 and column 0 are both X; the row comes first.
        let board: Board = "XXXX..X..".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Mark::X, [0, 1, 2])));
    }

    #[test]
    fn test_has_line_ignores_earlier_lines_of_other_mark() {
        let board: Board = "XXXOOO...".parse().unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
        assert!(has_line(&board, Mark::O));
        assert!(has_line(&board, Mark::X));
    }
}
