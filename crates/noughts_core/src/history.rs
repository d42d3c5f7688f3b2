//! Board snapshot history with a movable cursor.

use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{Board, JumpError};

/// Ordered board snapshots plus the index of the current one.
///
/// `snapshots[0]` is always the empty board and `current` always indexes
/// an existing snapshot. Appending from an earlier `current` discards the
/// snapshots after it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// The snapshot at `current`.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Number of snapshots, including the initial empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Truncates everything after `current`, appends `board`, and moves
    /// `current` to it.
    #[instrument(skip(self, board), fields(current = self.current, len = self.snapshots.len()))]
    pub fn push(&mut self, board: Board) {
        let discarded = self.snapshots.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(board);
        self.current = self.snapshots.len() - 1;
    }

    /// Moves `current` to `index` without discarding anything.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `index` is not a snapshot.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        if index >= self.snapshots.len() {
            return Err(JumpError::OutOfRange {
                requested: index,
                len: self.snapshots.len(),
            });
        }
        self.current = index;
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_new_history_is_anchored() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(*history.current(), 0);
        assert!(history.current_board().is_blank());
    }

    #[test]
    fn test_push_advances_current() {
        let mut history = History::new();
        let board = Board::new().with_mark(Position::Center, Mark::X);
        history.push(board);
        assert_eq!(history.len(), 2);
        assert_eq!(*history.current(), 1);
        assert_eq!(history.current_board(), &board);
    }

    #[test]
    fn test_push_after_jump_truncates() {
        let mut history = History::new();
        let first = Board::new().with_mark(Position::Center, Mark::X);
        history.push(first);
        history.push(first.with_mark(Position::TopLeft, Mark::O));
        history.jump_to(1).unwrap();

        let replacement = first.with_mark(Position::BottomRight, Mark::O);
        history.push(replacement);

        assert_eq!(history.len(), 3);
        assert_eq!(history.snapshots()[2], replacement);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = History::new();
        assert_eq!(history.jump_to(1), Err(JumpError::OutOfRange { requested: 1, len: 1 }));
        assert_eq!(*history.current(), 0);
    }
}
