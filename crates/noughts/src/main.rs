//! Noughts - two-player tic-tac-toe in the terminal.

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{Config, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config = Config::load(cli.config.as_deref(), &cwd)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file(config.log_file(), config.log_filter())?;
            info!(config = ?config, "Starting noughts");
            tui::run_tui(&config)
        }
        Command::Replay {
            name_x,
            name_o,
            json,
            moves,
        } => {
            logging::init_stderr(config.log_filter());
            let output = replay::run(&name_x, &name_o, &moves, json)?;
            println!("{output}");
            Ok(())
        }
    }
}
