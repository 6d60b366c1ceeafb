//! Win detection.

use crate::position::Position;
use crate::types::{Board, Mark, Square, WinningLine};
use tracing::instrument;

/// The 8 fixed win patterns, scanned in deterministic order:
/// rows, then columns, then diagonals.
const LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks for a winner on the board.
///
/// Returns the winning mark together with the completed line, or `None`.
/// At most one winner can exist on a reachable board; the fixed scan
/// order only matters for reproducible fixtures.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    for line in LINES {
        let [a, b, c] = line;
        let square = board.get(a);
        if square != Square::Empty && square == board.get(b) && square == board.get(c) {
            if let Square::Occupied(mark) = square {
                return Some((mark, line));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        board.set(Position::TopRight, Square::Occupied(Mark::X));

        let (winner, line) = check_winner(&board).unwrap();
        assert_eq!(winner, Mark::X);
        assert_eq!(
            line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_left_column() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::MiddleLeft, Square::Occupied(Mark::X));
        board.set(Position::BottomLeft, Square::Occupied(Mark::X));

        let (winner, line) = check_winner(&board).unwrap();
        assert_eq!(winner, Mark::X);
        assert_eq!(line.map(Position::index), [0, 3, 6]);
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::O));
        board.set(Position::BottomRight, Square::Occupied(Mark::O));

        let (winner, _) = check_winner(&board).unwrap();
        assert_eq!(winner, Mark::O);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::O));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }
}
