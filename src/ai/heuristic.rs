//! Opening move policy.
//!
//! While the board is nearly empty a full search always lands on the
//! same squares; this policy injects variety instead: center first, then
//! a random corner, then a random side. None of these openings concede a
//! forced loss, so the engine stays unbeatable end to end.

use super::rng::SelectorRng;
use crate::position::Position;
use crate::types::Board;

/// Picks an opening move. `open` must be the non-empty list of available
/// positions for `board`.
///
/// Preference order: center, random empty corner, random empty side,
/// first available. The later branches only fire on dense boards; the
/// policy stays total over any input.
pub(super) fn opening_move(board: &Board, open: &[Position], rng: &mut SelectorRng) -> Position {
    if board.is_empty(Position::CENTER) {
        return Position::CENTER;
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if let Some(&pos) = rng.choose(&corners) {
        return pos;
    }

    let sides: Vec<Position> = Position::SIDES
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if let Some(&pos) = rng.choose(&sides) {
        return pos;
    }

    open[0]
}
