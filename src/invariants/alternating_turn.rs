//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::types::{GameState, Mark};

/// Invariant: marks alternate turns, starting with X.
///
/// The move history must read X, O, X, O, ... and the to-move mark must
/// match the history parity. The turn flips even on the terminating move,
/// so the parity check holds in terminal states too.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        for (index, action) in history.iter().enumerate() {
            let expected = if index % 2 == 0 { Mark::X } else { Mark::O };
            if action.mark != expected {
                return false;
            }
        }

        let expected_next = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        state.to_move() == expected_next
    }

    fn description() -> &'static str {
        "marks alternate turns (X, O, X, O, ...)"
    }
}
