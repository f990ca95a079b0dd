//! Engine error types.

use crate::position::Position;

/// Error that can occur when validating or applying a move.
///
/// Every variant is a user-input error: the caller reports it and
/// re-prompts, and the game state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The input does not parse as an integer.
    #[display("Input {_0:?} is not a number")]
    InvalidFormat(String),

    /// The parsed index is not on the board.
    #[display("Index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(i64),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0.label())]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
