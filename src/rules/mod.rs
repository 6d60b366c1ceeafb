//! Game rules: pure queries over a board.
//!
//! Rules are total functions separated from board storage so the
//! controller, the AI search, and the contract checks can all share them.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::available_moves;
pub use win::check_winner;
