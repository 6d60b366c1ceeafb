//! Draw detection.

use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a draw: no winner and a full board.
#[instrument]
pub fn is_draw(board: &Board, winner: Option<Mark>) -> bool {
    winner.is_none() && is_full(board)
}
