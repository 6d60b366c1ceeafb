//! AI move selection.
//!
//! The selector dispatches on the number of empty cells: while the board
//! is still nearly empty it plays a seedable opening heuristic (variety
//! over perfect-play purity), and from the third move onward it runs
//! full-depth minimax, which never loses.

mod heuristic;
mod minimax;
mod rng;

pub use rng::SelectorRng;

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark};
use tracing::{debug, instrument};

/// Empty-cell count at or above which the opening heuristic plays
/// instead of minimax.
const OPENING_THRESHOLD: usize = 7;

/// Error returned when the selector is invoked on a terminal board.
///
/// Callers must not invoke the selector once the game is over; doing so
/// is a contract violation on their side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The board is full or already won.
    #[display("no legal move: the board is full or already won")]
    NoLegalMove,
}

impl std::error::Error for SelectError {}

/// A searched move: the chosen position plus its full-depth score from
/// the searching mark's perspective (-1 loss, 0 draw, +1 win).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchOutcome {
    /// The chosen position.
    pub position: Position,
    /// Score at full-depth lookahead.
    pub score: i8,
}

/// Move selector with an injectable random source.
///
/// The RNG only feeds the opening heuristic's corner/side tie-breaking;
/// seeding it makes every selection reproducible.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    rng: SelectorRng,
}

impl MoveSelector {
    /// Creates a selector with an entropy-seeded random source.
    pub fn new() -> Self {
        Self {
            rng: SelectorRng::from_entropy(),
        }
    }

    /// Creates a selector with a fixed seed, for reproducible play.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SelectorRng::new(seed),
        }
    }

    /// Selects a move for `mark` on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoLegalMove`] if the board is full or a
    /// line is already complete.
    #[instrument(skip(self, board))]
    pub fn select_move(&mut self, board: &Board, mark: Mark) -> Result<Position, SelectError> {
        let open = rules::available_moves(board);
        if open.is_empty() || rules::check_winner(board).is_some() {
            return Err(SelectError::NoLegalMove);
        }

        if open.len() >= OPENING_THRESHOLD {
            let position = heuristic::opening_move(board, &open, &mut self.rng);
            debug!(%position, empty = open.len(), "opening heuristic move");
            return Ok(position);
        }

        let outcome = minimax::search(board, mark).ok_or(SelectError::NoLegalMove)?;
        debug!(position = %outcome.position, score = outcome.score, "minimax move");
        Ok(outcome.position)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}
