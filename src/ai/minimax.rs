//! Exhaustive adversarial search.
//!
//! Full-depth minimax over the remaining moves. Terminal boards score +1
//! when the searching mark has won, -1 when the opponent has, 0 for a
//! draw; interior nodes maximize on the searcher's turn and minimize on
//! the opponent's. On a 3x3 board the tree is small enough that no
//! pruning is needed.

use super::SearchOutcome;
use crate::rules;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// Searches for the best move for `mark`, assuming it is `mark`'s turn.
///
/// Ties are broken deterministically: a move that completes a line
/// outranks equally scored deeper wins, then the first maximizing move
/// in ascending index order wins. Returns `None` on a full board.
#[instrument(skip(board))]
pub(super) fn search(board: &Board, mark: Mark) -> Option<SearchOutcome> {
    let open = rules::available_moves(board);
    let mut scratch = board.clone();

    for &position in &open {
        scratch.set(position, Square::Occupied(mark));
        let wins = rules::check_winner(&scratch).is_some();
        scratch.set(position, Square::Empty);

        if wins {
            return Some(SearchOutcome { position, score: 1 });
        }
    }

    let mut best: Option<SearchOutcome> = None;
    for &position in &open {
        scratch.set(position, Square::Occupied(mark));
        let score = score_board(&mut scratch, mark.opponent(), mark);
        scratch.set(position, Square::Empty);

        if best.is_none_or(|b| score > b.score) {
            best = Some(SearchOutcome { position, score });
        }
    }

    best
}

/// Scores a board from `searcher`'s perspective with `to_move` next.
fn score_board(board: &mut Board, to_move: Mark, searcher: Mark) -> i8 {
    if let Some((winner, _)) = rules::check_winner(board) {
        return if winner == searcher { 1 } else { -1 };
    }
    if rules::is_full(board) {
        return 0;
    }

    let maximizing = to_move == searcher;
    let mut best = if maximizing { i8::MIN } else { i8::MAX };

    for position in rules::available_moves(board) {
        board.set(position, Square::Occupied(to_move));
        let score = score_board(board, to_move.opponent(), searcher);
        board.set(position, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
