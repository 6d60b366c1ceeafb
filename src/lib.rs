//! Tic-tac-toe game engine.
//!
//! The engine is the decision core of a tic-tac-toe game: rules
//! enforcement, turn sequencing, win/draw detection, and adversarial
//! move search. Rendering, input scheduling, and theming belong to an
//! external UI collaborator that drives the engine through
//! [`GameController`] and reads frames back as [`Snapshot`]s.
//!
//! # Architecture
//!
//! - **Rules** ([`rules`]): pure queries over a board (winner, draw,
//!   available moves).
//! - **Controller** ([`GameController`]): the authoritative state
//!   machine. Illegal input never surfaces as an error; it leaves the
//!   snapshot unchanged.
//! - **AI** ([`MoveSelector`]): a seedable opening heuristic while the
//!   board is nearly empty, exhaustive minimax afterwards. The minimax
//!   player may win or draw but never loses.
//! - **Invariants & contracts** ([`invariants`], [`MoveContract`]):
//!   first-class game properties, re-checked after every move in debug
//!   builds.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameController, GameMode, Mark, Position};
//!
//! let mut game = GameController::new(GameMode::PlayerVsAi, Mark::X);
//!
//! assert!(game.apply_move(Position::TopLeft));
//! assert!(game.ai_turn_pending());
//! assert!(game.play_ai_turn());
//!
//! let snapshot = game.snapshot();
//! assert!(!snapshot.is_over());
//! assert_eq!(snapshot.active_mark, Mark::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod config;
mod contracts;
mod controller;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use ai::{MoveSelector, SelectError, SelectorRng};
pub use config::{ConfigError, GameConfig};
pub use contracts::{Contract, GameNotOver, LegalMove, MarksTurn, MoveContract, SquareIsEmpty};
pub use controller::{AiMove, GameController, GameMode};
pub use position::Position;
pub use snapshot::Snapshot;
pub use types::{Board, GameState, GameStatus, InvalidBoard, Mark, Square, WinningLine};
