//! Pure tic-tac-toe game logic.
//!
//! The [`GameMachine`] owns everything a two-player game needs: the board
//! snapshot history, whose turn it is, the player names and the derived
//! status. A presentation layer calls [`GameMachine::start_game`],
//! [`GameMachine::apply_move`] and [`GameMachine::restart`], then reads the
//! board and status back to render them. Nothing here touches a terminal.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameMachine, GameStatus, Mark};
//!
//! let mut game = GameMachine::new();
//! game.start_game("Alice", "Bob").unwrap();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(
//!     game.status(),
//!     &GameStatus::Won { mark: Mark::X, winner: "Alice".to_string() }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
pub mod invariants;
mod machine;
mod players;
mod position;
pub mod rules;
mod types;

pub use error::{JumpError, StartError};
pub use history::History;
pub use machine::{GameMachine, GameStatus, IgnoredReason, MoveOutcome, Phase};
pub use players::Players;
pub use position::Position;
pub use rules::{BoardStatus, calculate_status};
pub use types::{Board, Mark, Square};
