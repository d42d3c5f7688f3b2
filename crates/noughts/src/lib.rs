//! Two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`noughts_core`]; this crate is the presentation
//! layer around them:
//!
//! - **cli**: command-line parsing
//! - **config**: optional TOML settings
//! - **replay**: headless play of a fixed move list
//! - **tui**: the interactive ratatui front end

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod messages;
pub mod replay;
pub mod tui;

pub use config::{Config, ConfigError, PlayerDefaults};
pub use replay::{ReplayError, ReplayReport};
