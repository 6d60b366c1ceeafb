//! The game controller: authoritative state machine and turn sequencing.

use crate::action::Move;
use crate::ai::MoveSelector;
use crate::config::GameConfig;
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::{Board, GameState, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How the second mark is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans share the board.
    PlayerVsPlayer,
    /// One mark is driven by the move selector.
    PlayerVsAi,
}

/// A selected AI move, bundled with the board it was computed from.
///
/// UIs that delay the AI reply hold onto this ticket; applying it
/// validates the basis board against the live one, so a ticket that
/// outlives a restart is discarded instead of corrupting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiMove {
    basis: Board,
    position: Position,
}

impl AiMove {
    /// The selected position.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Owns the game state and sequences turns.
///
/// All mutation goes through the public operations; illegal input is
/// rejected silently (state unchanged), so a UI observes failure only as
/// an unchanged [`Snapshot`].
#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
    mode: GameMode,
    human_mark: Mark,
    selector: MoveSelector,
}

impl GameController {
    /// Creates a new game. The mark assignment is fixed for the session;
    /// in [`GameMode::PlayerVsAi`] the AI plays the opposing mark.
    #[instrument]
    pub fn new(mode: GameMode, human_mark: Mark) -> Self {
        info!(?mode, %human_mark, "creating new game");
        Self {
            state: GameState::new(),
            mode,
            human_mark,
            selector: MoveSelector::new(),
        }
    }

    /// Creates a new game from a configuration, honoring its AI seed.
    #[instrument]
    pub fn with_config(config: &GameConfig) -> Self {
        let selector = match config.ai_seed() {
            Some(seed) => MoveSelector::with_seed(seed),
            None => MoveSelector::new(),
        };
        info!(mode = ?config.mode(), human_mark = %config.human_mark(), "creating new game from config");
        Self {
            state: GameState::new(),
            mode: config.mode(),
            human_mark: config.human_mark(),
            selector,
        }
    }

    /// Returns the current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the human's mark.
    ///
    /// In [`GameMode::PlayerVsPlayer`] both marks are human-driven and
    /// this is simply the mark chosen at creation.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// Returns the AI's mark, if an AI is playing.
    pub fn ai_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsAi => Some(self.human_mark.opponent()),
        }
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a human move at the given position.
    ///
    /// Returns whether the move was applied. Occupied cells, terminal
    /// states, and out-of-turn input (including any input while an AI
    /// move is pending) leave the state unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: Position) -> bool {
        if self.ai_turn_pending() {
            warn!(%position, "move rejected: waiting on the AI turn");
            return false;
        }

        self.place(Move::new(self.state.to_move(), position))
    }

    /// Resets to the initial state: empty board, X to move, mode and
    /// marks preserved.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("restarting game");
        self.state = GameState::new();
    }

    /// Switches mode. A mode switch always restarts the board; there is
    /// no mid-game mode change.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(?mode, "switching mode");
        self.mode = mode;
        self.restart();
    }

    /// True while the game is ongoing in [`GameMode::PlayerVsAi`] and it
    /// is the AI's turn. UIs disable input while this holds.
    pub fn ai_turn_pending(&self) -> bool {
        !self.state.status().is_over()
            && self
                .ai_mark()
                .is_some_and(|mark| mark == self.state.to_move())
    }

    /// Selects the pending AI move without applying it.
    ///
    /// Returns `None` when no AI turn is pending. The returned ticket is
    /// applied with [`Self::apply_ai_move`], immediately or after a
    /// UI-scheduled delay.
    #[instrument(skip(self))]
    pub fn request_ai_move(&mut self) -> Option<AiMove> {
        if !self.ai_turn_pending() {
            return None;
        }

        let mark = self.human_mark.opponent();
        let basis = self.state.board().clone();
        match self.selector.select_move(&basis, mark) {
            Ok(position) => {
                debug!(%position, "AI move selected");
                Some(AiMove { basis, position })
            }
            Err(error) => {
                // Unreachable while a turn is pending; a caller reaching
                // it has violated the selector contract.
                debug_assert!(false, "selector failed on a pending turn: {error}");
                warn!(%error, "AI move selection failed");
                None
            }
        }
    }

    /// Applies a previously requested AI move.
    ///
    /// Returns whether the move was applied. A ticket whose basis board
    /// no longer matches the live board (the game restarted or advanced
    /// since selection) is discarded.
    #[instrument(skip(self, ai_move))]
    pub fn apply_ai_move(&mut self, ai_move: AiMove) -> bool {
        if !self.ai_turn_pending() {
            debug!("AI move discarded: no AI turn pending");
            return false;
        }
        if ai_move.basis != *self.state.board() {
            warn!("stale AI move discarded");
            return false;
        }

        self.place(Move::new(self.human_mark.opponent(), ai_move.position))
    }

    /// Selects and applies the pending AI move in one synchronous step.
    ///
    /// Returns whether a move was applied.
    #[instrument(skip(self))]
    pub fn play_ai_turn(&mut self) -> bool {
        match self.request_ai_move() {
            Some(ai_move) => self.apply_ai_move(ai_move),
            None => false,
        }
    }

    /// Captures a read-only view for the UI collaborator.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.ai_turn_pending())
    }

    /// Validates, applies, and re-evaluates a move.
    fn place(&mut self, action: Move) -> bool {
        if let Err(error) = MoveContract::pre(&self.state, &action) {
            debug!(%action, %error, "move rejected");
            return false;
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        self.state.apply(action);
        self.update_status();
        debug!(%action, board = %self.state.board(), "move applied");

        #[cfg(debug_assertions)]
        if let Err(error) = MoveContract::post(&before, &self.state) {
            panic!("move postcondition violated: {error}");
        }

        true
    }

    /// Re-evaluates the terminal state after a placement.
    fn update_status(&mut self) {
        if let Some((winner, line)) = rules::check_winner(self.state.board()) {
            info!(%winner, "game won");
            self.state.set_status(GameStatus::Won { winner, line });
        } else if rules::is_full(self.state.board()) {
            info!("game drawn");
            self.state.set_status(GameStatus::Draw);
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameMode::PlayerVsAi, Mark::X)
    }
}
