//! Alternating turn invariant: X and O take turns, X first.

use super::Invariant;
use crate::{GameMachine, Mark};

/// Invariant: on the current board X has the same number of marks as O or
/// one more, and X is next exactly when the counts are equal.
pub struct AlternatingTurnInvariant;

impl Invariant<GameMachine> for AlternatingTurnInvariant {
    fn holds(game: &GameMachine) -> bool {
        let history = game.history();
        let Some(board) = history.snapshots().get(*history.current()) else {
            return false;
        };
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let balanced = x_count == o_count || x_count == o_count + 1;
        balanced && game.x_is_next() == (x_count == o_count)
    }

    fn description() -> &'static str {
        "Marks alternate starting with X and the turn flag matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_each_move() {
        let mut game = GameMachine::new();
        game.start_game("Alice", "Bob").unwrap();
        for idx in [4, 0, 8, 2] {
            game.apply_move(idx);
            assert!(AlternatingTurnInvariant::holds(&game));
        }
    }

    #[test]
    fn test_flipped_flag_violates() {
        let mut game = GameMachine::new();
        game.start_game("Alice", "Bob").unwrap();
        game.apply_move(4);
        game.x_is_next = true;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
