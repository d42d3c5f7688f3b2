//! Status consistency invariant: stored status and phase agree with the board.

use super::Invariant;
use crate::rules::{BoardStatus, calculate_status};
use crate::{GameMachine, GameStatus, Phase};

/// Invariant: the stored [`GameStatus`] and [`Phase`] are what the current
/// board implies, and an unstarted game has no players and no moves.
pub struct StatusConsistentInvariant;

impl Invariant<GameMachine> for StatusConsistentInvariant {
    fn holds(game: &GameMachine) -> bool {
        let history = game.history();
        let Some(board) = history.snapshots().get(*history.current()) else {
            return false;
        };

        if game.phase() == Phase::NotStarted {
            return game.players().is_none()
                && history.len() == 1
                && *game.status() == GameStatus::InProgress;
        }

        let phase_matches = match calculate_status(board) {
            BoardStatus::InProgress => game.phase() == Phase::InProgress,
            BoardStatus::Won(_) | BoardStatus::Draw => game.phase() == Phase::Finished,
        };
        let status_matches = match (calculate_status(board), game.status()) {
            (BoardStatus::InProgress, GameStatus::InProgress) => true,
            (BoardStatus::Draw, GameStatus::Draw) => true,
            (BoardStatus::Won(expected), GameStatus::Won { mark, winner }) => {
                expected == *mark && game.player_name(*mark) == Some(winner.as_str())
            }
            _ => false,
        };

        game.players().is_some() && phase_matches && status_matches
    }

    fn description() -> &'static str {
        "Status and phase match the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_holds_for_won_game() {
        let mut game = GameMachine::new();
        game.start_game("Alice", "Bob").unwrap();
        for idx in [0, 4, 1, 5, 2] {
            game.apply_move(idx);
        }
        assert_eq!(game.phase(), Phase::Finished);
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_winner_name_violates() {
        let mut game = GameMachine::new();
        game.start_game("Alice", "Bob").unwrap();
        for idx in [0, 4, 1, 5, 2] {
            game.apply_move(idx);
        }
        game.status = GameStatus::Won {
            mark: Mark::X,
            winner: "Bob".to_string(),
        };
        assert!(!StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stale_phase_violates() {
        let mut game = GameMachine::new();
        game.start_game("Alice", "Bob").unwrap();
        game.phase = Phase::Finished;
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
