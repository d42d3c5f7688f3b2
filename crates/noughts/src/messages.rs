//! User-facing text shared by the terminal UI and the replay output.

use noughts_core::{GameMachine, GameStatus, Phase};

/// Shown when either player name is blank.
pub const INVALID_NAMES: &str = "Please enter valid names for both players.";

/// Second line of the win dialog.
pub const WIN_BODY: &str = "You won the game!";

/// Title of the draw dialog.
pub const DRAW_TITLE: &str = "It's a Draw!";

/// Second line of the draw dialog.
pub const DRAW_BODY: &str = "No one wins this round.";

/// Title of the win dialog.
pub fn win_title(winner: &str) -> String {
    format!("Congratulations {winner}!")
}

/// `"Alice's turn (X)"` for the player to move, if a game is running.
pub fn turn_banner(game: &GameMachine) -> Option<String> {
    let mark = game.to_move();
    game.player_name(mark)
        .map(|name| format!("{name}'s turn ({mark})"))
}

/// One-line summary of the game.
pub fn status_line(game: &GameMachine) -> String {
    match (game.phase(), game.status()) {
        (Phase::NotStarted, _) => "Waiting for player names".to_string(),
        (_, GameStatus::Won { mark, winner }) => format!("{winner} wins ({mark})"),
        (_, GameStatus::Draw) => "Draw".to_string(),
        (_, GameStatus::InProgress) => turn_banner(game).unwrap_or_default(),
    }
}
