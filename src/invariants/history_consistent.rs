//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use crate::types::{Board, GameState, Square};

/// Invariant: replaying the history onto a fresh board reproduces the
/// current board.
///
/// Every history entry must land on a previously empty square (squares
/// are never overwritten once set), and no square may be occupied without
/// a matching history entry.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();

        for action in state.history() {
            if !replayed.is_empty(action.position) {
                return false;
            }
            replayed.set(action.position, Square::Occupied(action.mark));
        }

        replayed == *state.board()
    }

    fn description() -> &'static str {
        "the board matches its replayed move history"
    }
}
