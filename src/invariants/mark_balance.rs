//! Mark balance invariant: X leads O by at most one placement.

use super::Invariant;
use crate::types::{GameState, Mark};

/// Invariant: `#X == #O` or `#X == #O + 1`.
///
/// X always moves first, so at any reachable state the X count equals the
/// O count or exceeds it by exactly one.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Mark::X);
        let o_count = state.board().count(Mark::O);

        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}
