//! Tests for the headless replay command.

use noughts::replay::{self, ReplayError};
use noughts_core::{GameStatus, IgnoredReason, Mark, Phase, Position};

fn tokens(moves: &[&str]) -> Vec<String> {
    moves.iter().map(|m| m.to_string()).collect()
}

#[test]
fn test_replay_reports_winner_name() {
    let output = replay::run("Alice", "Bob", &tokens(&["0", "4", "1", "5", "2"]), false).unwrap();
    assert_eq!(output, "X|X|X\n-+-+-\n4|O|O\n-+-+-\n7|8|9\n\nAlice wins (X)");
}

#[test]
fn test_replay_draw() {
    let moves = tokens(&["0", "1", "2", "4", "3", "5", "7", "6", "8"]);
    let output = replay::run("Alice", "Bob", &moves, false).unwrap();
    assert!(output.ends_with("\n\nDraw"));
}

#[test]
fn test_replay_in_progress_shows_turn() {
    let output = replay::run("Alice", "Bob", &tokens(&["center"]), false).unwrap();
    assert!(output.ends_with("Bob's turn (O)"));
}

#[test]
fn test_replay_lists_ignored_moves() {
    let moves = replay::parse_moves(&tokens(&["4", "center", "top-left"])).unwrap();
    let report = replay::replay("Alice", "Bob", &moves).unwrap();

    assert_eq!(
        report.ignored,
        vec![(Position::Center, IgnoredReason::SquareOccupied)]
    );
    assert_eq!(report.game.history().len(), 3);
    assert!(replay::render_text(&report).ends_with("ignored Center: Square already taken"));
}

#[test]
fn test_replay_rejects_blank_names() {
    let err = replay::run("Alice", "   ", &tokens(&["0"]), false).unwrap_err();
    assert!(matches!(err, ReplayError::Start(_)));
}

#[test]
fn test_replay_rejects_unknown_move() {
    let err = replay::run("Alice", "Bob", &tokens(&["0", "nine"]), false).unwrap_err();
    assert!(matches!(err, ReplayError::InvalidMove(ref token) if token == "nine"));
}

#[test]
fn test_replay_json_output() {
    let output = replay::run("Alice", "Bob", &tokens(&["0", "4", "1", "5", "2"]), true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["phase"], "Finished");
    assert_eq!(json["status"]["Won"]["winner"], "Alice");
    assert_eq!(json["history"]["snapshots"].as_array().unwrap().len(), 6);

    let status: GameStatus = serde_json::from_value(json["status"].clone()).unwrap();
    assert_eq!(
        status,
        GameStatus::Won {
            mark: Mark::X,
            winner: "Alice".to_string()
        }
    );
    let phase: Phase = serde_json::from_value(json["phase"].clone()).unwrap();
    assert_eq!(phase, Phase::Finished);
}
