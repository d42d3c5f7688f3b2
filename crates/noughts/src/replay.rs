//! Headless replay of a move sequence.

use derive_more::{Display, Error, From};
use noughts_core::{GameMachine, IgnoredReason, MoveOutcome, Position, StartError};
use tracing::{info, instrument, warn};

use crate::messages::status_line;

/// Errors from the replay command.
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// A move token is neither an index 0-8 nor a position label.
    #[display("Invalid move '{_0}': expected 0-8 or a label such as 'center'")]
    #[from(skip)]
    InvalidMove(#[error(not(source))] String),

    /// The players could not be registered.
    #[display("Cannot start game: {_0}")]
    Start(StartError),

    /// JSON output failed.
    #[display("Cannot encode game: {_0}")]
    Json(serde_json::Error),
}

/// Final state of a replayed game plus the moves that had no effect.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Machine after every move was applied.
    pub game: GameMachine,
    /// Moves that were ignored, with the reason.
    pub ignored: Vec<(Position, IgnoredReason)>,
}

/// Parses move tokens into positions.
#[instrument]
pub fn parse_moves(tokens: &[String]) -> Result<Vec<Position>, ReplayError> {
    tokens
        .iter()
        .map(|token| {
            Position::from_label_or_number(token)
                .ok_or_else(|| ReplayError::InvalidMove(token.clone()))
        })
        .collect()
}

/// Starts a game and applies `moves` in order.
#[instrument(skip(name_x, name_o))]
pub fn replay(name_x: &str, name_o: &str, moves: &[Position]) -> Result<ReplayReport, ReplayError> {
    let mut game = GameMachine::new();
    game.start_game(name_x, name_o)?;

    let mut ignored = Vec::new();
    for &position in moves {
        if let MoveOutcome::Ignored(reason) = game.apply_move(position.to_index()) {
            warn!(%position, %reason, "Move ignored");
            ignored.push((position, reason));
        }
    }

    info!(status = %status_line(&game), ignored = ignored.len(), "Replay finished");
    Ok(ReplayReport { game, ignored })
}

/// Renders the report as the board followed by the status line.
pub fn render_text(report: &ReplayReport) -> String {
    let mut out = report.game.board().display();
    out.push_str("\n\n");
    out.push_str(&status_line(&report.game));
    for (position, reason) in &report.ignored {
        out.push_str(&format!("\nignored {}: {}", position, reason));
    }
    out
}

/// Renders the final machine as pretty JSON.
pub fn render_json(report: &ReplayReport) -> Result<String, ReplayError> {
    Ok(serde_json::to_string_pretty(&report.game)?)
}

/// Runs the `replay` command and returns what should be printed.
#[instrument(skip(name_x, name_o, tokens))]
pub fn run(name_x: &str, name_o: &str, tokens: &[String], json: bool) -> Result<String, ReplayError> {
    let moves = parse_moves(tokens)?;
    let report = replay(name_x, name_o, &moves)?;
    if json {
        render_json(&report)
    } else {
        Ok(render_text(&report))
    }
}
