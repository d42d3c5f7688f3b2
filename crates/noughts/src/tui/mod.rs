//! Interactive terminal UI.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, NameField};
pub use input::move_cursor;
pub use ui::draw;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::Config;

/// Leaves raw mode and the alternate screen when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            error!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            error!(error = %err, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive game until the players quit.
///
/// The terminal is restored on every exit path, including setup failures.
#[instrument(skip(config))]
pub fn run_tui(config: &Config) -> Result<()> {
    info!("Starting terminal UI");

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config));
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for a key, repeat.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Skip release and repeat events (some terminals report both).
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == AppAction::Quit {
                info!("Players quit");
                return Ok(());
            }
        }
    }
}
