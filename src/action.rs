//! First-class move actions and their rejection kinds.
//!
//! Moves are domain events, not side effects: they can be validated
//! independently of execution and replayed by the invariant checks.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was rejected.
///
/// Rejections never propagate to the UI collaborator; the controller
/// recovers locally by leaving state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has reached a terminal state.
    #[display("game is already over")]
    GameOver,

    /// The mark is not the one whose turn it is.
    #[display("it is not {}'s turn", _0)]
    NotYourTurn(Mark),

    /// A postcondition failed after applying a move (programmer error).
    #[display("invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
