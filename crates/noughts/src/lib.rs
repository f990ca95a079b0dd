//! Pure tic-tac-toe game logic.
//!
//! The crate owns the state of a single 3x3 game and exposes
//! everything a front end needs to drive it to completion and start
//! over. It performs no I/O of its own, so any prompt loop or test
//! harness can drive it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
mod rules;
mod types;

pub use error::MoveError;
pub use game::Game;
pub use position::Position;
pub use rules::{check_winner, is_full};
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity in front-end code.
pub type Mark = Player;
