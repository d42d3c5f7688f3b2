//! Command-line interface for noughts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a fixed sequence of moves and print the result
    Replay {
        /// Name of the player holding X
        #[arg(long = "x")]
        name_x: String,

        /// Name of the player holding O
        #[arg(long = "o")]
        name_o: String,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,

        /// Moves, as cell indices 0-8 or labels such as `center`
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from([
            "noughts", "replay", "--x", "Alice", "--o", "Bob", "--json", "0", "center",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                name_x: "Alice".to_string(),
                name_o: "Bob".to_string(),
                json: true,
                moves: vec!["0".to_string(), "center".to_string()],
            })
        );
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["noughts", "play", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
