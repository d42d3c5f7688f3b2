//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot. Rules are kept apart from the
//! state machine so both the machine and its invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner, winning_line};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Mark};

/// Status of a single board, independent of who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStatus {
    /// No completed line and at least one empty square.
    InProgress,
    /// A line of three identical marks exists.
    Won(Mark),
    /// Every square is occupied and no line is complete.
    Draw,
}

impl BoardStatus {
    /// True for `Won` and `Draw`.
    pub fn is_decided(self) -> bool {
        !matches!(self, BoardStatus::InProgress)
    }
}

/// Computes the status of `board`.
///
/// A win takes precedence over a full board.
#[instrument(level = "trace")]
pub fn calculate_status(board: &Board) -> BoardStatus {
    if let Some(mark) = check_winner(board) {
        BoardStatus::Won(mark)
    } else if is_full(board) {
        BoardStatus::Draw
    } else {
        BoardStatus::InProgress
    }
}
