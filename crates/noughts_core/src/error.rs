//! Errors reported by the game state machine.

use crate::{Mark, Phase};

/// Reasons `start_game` can refuse to begin a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StartError {
    /// One player's name is empty after trimming.
    #[display("Player {_0}'s name is empty")]
    BlankName(#[error(not(source))] Mark),

    /// Both names are empty after trimming.
    #[display("Both player names are empty")]
    BlankNames,

    /// A game is already underway; restart first.
    #[display("Cannot start a game in phase {_0:?}")]
    AlreadyStarted(#[error(not(source))] Phase),
}

/// Reasons `jump_to` can refuse to move through the history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// No game has been started.
    #[display("No game in progress")]
    NotStarted,

    /// The game is decided; only a restart leaves `Finished`.
    #[display("Game is finished, restart to play again")]
    Finished,

    /// The requested move is not in the history.
    #[display("Move {requested} is outside history of length {len}")]
    OutOfRange {
        /// Requested move index.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
