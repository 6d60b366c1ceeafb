//! Serializable read-only view of a game for UI collaborators.

use crate::types::{Board, GameState, GameStatus, Mark, WinningLine};
use serde::{Deserialize, Serialize};

/// Everything a UI needs to render one frame of the game.
///
/// Snapshots are plain data: cloned out of the controller, serializable,
/// and comparable, so a UI can detect "nothing changed" after a rejected
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// The mark that would move next.
    pub active_mark: Mark,
    /// Game status, with the completed line when won.
    pub status: GameStatus,
    /// The completed line, when won.
    pub winning_line: Option<WinningLine>,
    /// True while the UI should disable input and drive the AI turn.
    pub ai_turn_pending: bool,
}

impl Snapshot {
    /// Captures a snapshot of the given state.
    pub(crate) fn capture(state: &GameState, ai_turn_pending: bool) -> Self {
        Self {
            board: state.board().clone(),
            active_mark: state.to_move(),
            status: state.status(),
            winning_line: state.status().winning_line(),
            ai_turn_pending,
        }
    }

    /// Returns true once the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Human-readable status line for display.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("In progress. {} to move.", self.active_mark),
            GameStatus::Won { winner, .. } => format!("Game over. {winner} wins!"),
            GameStatus::Draw => "Game over. Draw!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;

    #[test]
    fn test_capture_initial_state() {
        let snapshot = Snapshot::capture(&GameState::new(), false);

        assert_eq!(snapshot.active_mark, Mark::X);
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot.winning_line, None);
        assert!(!snapshot.is_over());
        assert_eq!(snapshot.status_line(), "In progress. X to move.");
    }

    #[test]
    fn test_won_snapshot_carries_line() {
        let mut state = GameState::new();
        state.apply(Move::new(Mark::X, Position::TopLeft));
        let line = [Position::TopLeft, Position::TopCenter, Position::TopRight];
        state.set_status(GameStatus::Won {
            winner: Mark::X,
            line,
        });

        let snapshot = Snapshot::capture(&state, false);
        assert_eq!(snapshot.winner(), Some(Mark::X));
        assert_eq!(snapshot.winning_line, Some(line));
        assert_eq!(snapshot.status_line(), "Game over. X wins!");
    }

    #[test]
    fn test_draw_status_line() {
        let mut state = GameState::new();
        state.set_status(GameStatus::Draw);

        let snapshot = Snapshot::capture(&state, false);
        assert!(snapshot.is_over());
        assert_eq!(snapshot.winner(), None);
        assert_eq!(snapshot.status_line(), "Game over. Draw!");
    }
}
