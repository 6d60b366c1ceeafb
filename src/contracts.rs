//! Contract-based validation for move transitions.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. The
//! preconditions are the silent-rejection kinds the controller reports
//! through [`MoveError`]; the postcondition re-checks every game
//! invariant.

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::types::GameState;
use tracing::instrument;

/// A contract defines preconditions and postconditions for a state
/// transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not reached a terminal state.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the precondition.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(state))]
    pub fn check(action: &Move, state: &GameState) -> Result<(), MoveError> {
        if !state.board().is_empty(action.position) {
            Err(MoveError::SquareOccupied(action.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move's mark must be the one to move.
pub struct MarksTurn;

impl MarksTurn {
    /// Checks the precondition.
    #[instrument(skip(state))]
    pub fn check(action: &Move, state: &GameState) -> Result<(), MoveError> {
        if action.mark != state.to_move() {
            Err(MoveError::NotYourTurn(action.mark))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal when the game is ongoing, the
/// square is empty, and it is the mark's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(action: &Move, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        SquareIsEmpty::check(action, state)?;
        MarksTurn::check(action, state)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: [`LegalMove`]. Postconditions: all of
/// [`GameInvariants`] still hold.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}
