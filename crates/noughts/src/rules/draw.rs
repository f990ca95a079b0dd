//! Draw detection logic.

use crate::position::Position;
use crate::types::{Board, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw. Pure query, safe to call
/// repeatedly.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    Position::iter().all(|pos| board.get(pos) != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_one_gap_not_full() {
        let mut board = Board::new();
        for pos in Position::iter().filter(|pos| *pos != Position::Center) {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::iter() {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert!(is_full(&board));
        // Idempotent: asking twice changes nothing.
        assert!(is_full(&board));
    }
}
