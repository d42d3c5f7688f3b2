//! The game state machine driven by the presentation layer.
//!
//! A [`GameMachine`] is created in [`Phase::NotStarted`]. Two valid names
//! move it to [`Phase::InProgress`]; a winning or board-filling move moves it
//! to [`Phase::Finished`]; [`GameMachine::restart`] returns it to
//! `NotStarted` from anywhere.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::invariants::debug_assert_invariants;
use crate::rules::{BoardStatus, calculate_status};
use crate::{Board, History, JumpError, Mark, Players, Position, StartError};

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for two valid player names.
    NotStarted,
    /// Moves are being played.
    InProgress,
    /// A win or draw has been reached.
    Finished,
}

/// Status of the current game, with the winner's name when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner yet and the board has empty squares.
    InProgress,
    /// `mark` completed a line; `winner` is the name bound to it.
    Won {
        /// Winning mark.
        mark: Mark,
        /// Name of the player holding `mark`.
        winner: String,
    },
    /// Board full with no line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredReason {
    /// No game has been started.
    #[display("No game in progress")]
    NotStarted,
    /// Cell index outside 0-8.
    #[display("No such square")]
    OutOfRange,
    /// The square already holds a mark.
    #[display("Square already taken")]
    SquareOccupied,
    /// The current board already has a winner or is full.
    #[display("Game is already decided")]
    GameDecided,
}

/// Result of [`GameMachine::apply_move`].
///
/// Ignored moves leave the machine untouched; the reason is informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed.
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// Status after the move.
        status: GameStatus,
    },
    /// Nothing changed.
    Ignored(IgnoredReason),
}

impl MoveOutcome {
    /// True if the move changed the board.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Two-player tic-tac-toe state machine.
///
/// Owns the snapshot history, the turn flag, the player names and the
/// derived status. All mutation goes through [`start_game`](Self::start_game),
/// [`apply_move`](Self::apply_move), [`jump_to`](Self::jump_to) and
/// [`restart`](Self::restart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameMachine {
    pub(crate) phase: Phase,
    pub(crate) history: History,
    pub(crate) x_is_next: bool,
    pub(crate) players: Option<Players>,
    pub(crate) status: GameStatus,
}

impl GameMachine {
    /// Creates a machine waiting for player names.
    #[instrument]
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            history: History::new(),
            x_is_next: true,
            players: None,
            status: GameStatus::InProgress,
        }
    }

    /// Starts a game with the given names.
    ///
    /// Names are trimmed before they are stored.
    ///
    /// # Errors
    ///
    /// Returns [`StartError`] if either trimmed name is empty, or if a game
    /// is already underway. The machine is unchanged on error.
    #[instrument(skip(self, name_x, name_o), fields(phase = ?self.phase))]
    pub fn start_game(&mut self, name_x: &str, name_o: &str) -> Result<(), StartError> {
        if self.phase != Phase::NotStarted {
            return Err(StartError::AlreadyStarted(self.phase));
        }
        let players = Players::new(name_x, name_o)?;
        info!(x = %players.x(), o = %players.o(), "Game started");

        self.history = History::new();
        self.x_is_next = true;
        self.status = GameStatus::InProgress;
        self.players = Some(players);
        self.phase = Phase::InProgress;

        debug_assert_invariants(self);
        Ok(())
    }

    /// Places the current player's mark at `cell_index` (0-8).
    ///
    /// Stale or redundant moves (no game running, game decided, square
    /// taken, index out of range) are ignored without touching state.
    #[instrument(skip(self), fields(phase = ?self.phase, x_is_next = self.x_is_next))]
    pub fn apply_move(&mut self, cell_index: usize) -> MoveOutcome {
        if self.phase != Phase::InProgress {
            debug!("Move ignored, no game in progress");
            return MoveOutcome::Ignored(match self.phase {
                Phase::Finished => IgnoredReason::GameDecided,
                _ => IgnoredReason::NotStarted,
            });
        }
        let Some(position) = Position::from_index(cell_index) else {
            debug!("Move ignored, index out of range");
            return MoveOutcome::Ignored(IgnoredReason::OutOfRange);
        };
        let current = *self.history.current_board();
        if calculate_status(&current).is_decided() {
            debug!("Move ignored, board already decided");
            return MoveOutcome::Ignored(IgnoredReason::GameDecided);
        }
        if !current.is_empty(position) {
            debug!(%position, "Move ignored, square occupied");
            return MoveOutcome::Ignored(IgnoredReason::SquareOccupied);
        }

        let mark = self.to_move();
        let next = current.with_mark(position, mark);
        self.history.push(next);
        self.x_is_next = !self.x_is_next;
        self.refresh_status();
        debug!(%mark, %position, status = ?self.status, "Move applied");

        debug_assert_invariants(self);
        MoveOutcome::Placed {
            mark,
            position,
            status: self.status.clone(),
        }
    }

    /// Moves to an earlier (or later) snapshot without discarding history.
    ///
    /// X is to move on even-numbered snapshots. Only a game in progress can
    /// be navigated; a finished game stays finished until [`restart`](Self::restart).
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if no game is in progress or `move_index` is not
    /// in the history. The machine is unchanged on error.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        match self.phase {
            Phase::NotStarted => return Err(JumpError::NotStarted),
            Phase::Finished => return Err(JumpError::Finished),
            Phase::InProgress => {}
        }
        self.history.jump_to(move_index)?;
        self.x_is_next = move_index % 2 == 0;
        self.refresh_status();
        debug!(status = ?self.status, "Jumped to snapshot");

        debug_assert_invariants(self);
        Ok(())
    }

    /// Clears everything, including player names, and waits for new names.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn restart(&mut self) {
        info!("Game restarted");
        *self = Self::new();
        debug_assert_invariants(self);
    }

    /// Recomputes status and phase from the current board.
    fn refresh_status(&mut self) {
        self.status = match calculate_status(self.history.current_board()) {
            BoardStatus::InProgress => GameStatus::InProgress,
            BoardStatus::Draw => GameStatus::Draw,
            BoardStatus::Won(mark) => GameStatus::Won {
                mark,
                winner: self.player_name(mark).unwrap_or_default().to_string(),
            },
        };
        self.phase = if self.status.is_over() {
            info!(status = ?self.status, "Game finished");
            Phase::Finished
        } else {
            Phase::InProgress
        };
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current board snapshot.
    pub fn board(&self) -> &Board {
        self.history.current_board()
    }

    /// True when X plays next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Mark of the player to move.
    pub fn to_move(&self) -> Mark {
        if self.x_is_next { Mark::X } else { Mark::O }
    }

    /// Status derived from the current board.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Player names, once a game has started.
    pub fn players(&self) -> Option<&Players> {
        self.players.as_ref()
    }

    /// Name bound to `mark`, once a game has started.
    pub fn player_name(&self, mark: Mark) -> Option<&str> {
        self.players.as_ref().map(|p| p.name(mark))
    }

    /// The full snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the current snapshot.
    pub fn current_move(&self) -> usize {
        *self.history.current()
    }
}

impl Default for GameMachine {
    fn default() -> Self {
        Self::new()
    }
}
