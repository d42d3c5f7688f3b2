//! History anchor invariant: the empty board is always the first snapshot.

use super::Invariant;
use crate::GameMachine;

/// Invariant: history is non-empty, starts with the empty board, and the
/// current move indexes an existing snapshot.
pub struct HistoryAnchoredInvariant;

impl Invariant<GameMachine> for HistoryAnchoredInvariant {
    fn holds(game: &GameMachine) -> bool {
        let history = game.history();
        history
            .snapshots()
            .first()
            .is_some_and(|first| first.is_blank())
            && *history.current() < history.len()
    }

    fn description() -> &'static str {
        "History starts with the empty board and the current move is in range"
    }
}
