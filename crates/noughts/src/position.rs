//! Typed board positions and raw-input parsing.

use crate::error::MoveError;
use crate::types::Board;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions map to board indices 0-8 in row-major order, so a value
/// of this type is always on the board. Raw player input enters
/// through [`Position::parse`], which is where out-of-range indices
/// are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Converts the position to its board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Human-readable label, used in error display and logs.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a raw input token into a position.
    ///
    /// The token must be an integer in [0, 8]. Failing to parse and
    /// parsing out of range are distinct errors so the caller can show
    /// the matching message.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidFormat`] if the trimmed token is not an
    /// integer, [`MoveError::OutOfBounds`] if the integer is negative
    /// or greater than 8.
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, MoveError> {
        let token = raw.trim();
        let index: i64 = token
            .parse()
            .map_err(|_| MoveError::InvalidFormat(token.to_string()))?;
        // Both ends of the range are checked: try_from rejects
        // negative indices, from_index rejects indices past 8.
        usize::try_from(index)
            .ok()
            .and_then(Self::from_index)
            .ok_or(MoveError::OutOfBounds(index))
    }

    /// Positions whose squares are still empty on the given board.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..9 {
            let pos = Position::from_index(index).unwrap();
            assert_eq!(pos.index(), index);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_accepts_surrounding_whitespace() {
        assert_eq!(Position::parse(" 4 \n"), Ok(Position::Center));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            Position::parse("four"),
            Err(MoveError::InvalidFormat(_))
        ));
        assert!(matches!(
            Position::parse(""),
            Err(MoveError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(Position::parse("9"), Err(MoveError::OutOfBounds(9)));
        assert_eq!(Position::parse("-1"), Err(MoveError::OutOfBounds(-1)));
    }

    #[test]
    fn test_valid_moves_shrink_as_squares_fill() {
        let mut board = Board::new();
        assert_eq!(Position::valid_moves(&board).len(), 9);
        board.set(
            Position::Center,
            crate::types::Square::Occupied(crate::types::Player::X),
        );
        let moves = Position::valid_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Position::Center));
    }
}
