//! The tic-tac-toe game engine.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// A single tic-tac-toe game.
///
/// Owns the board, the turn, the outcome, and the move history. A
/// front end drives it by feeding raw input to [`Game::submit`] and
/// querying the status between moves. There is no hidden state: the
/// lifecycle is `InProgress` until a move wins or fills the board,
/// and [`Game::reset`] starts over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the game to its starting state: empty board, X to
    /// move, no winner, empty history. Idempotent.
    #[instrument]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is next.
    ///
    /// The turn only advances when the game continues, so after a
    /// winning move this is still the winner.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winner, if the game has been won. `None` both while the
    /// game is running and after a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Whether the game has reached a terminal state (won or drawn).
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Parses a raw input token and applies it as the current
    /// player's move. Returns the position that was played.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidFormat`] if the token is not an integer,
    /// [`MoveError::OutOfBounds`] if it is outside 0-8,
    /// [`MoveError::CellOccupied`] if the square is taken, and
    /// [`MoveError::GameOver`] if the game has already ended. The
    /// state is unchanged on every error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn submit(&mut self, raw: &str) -> Result<Position, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::parse(raw)?;
        self.place(pos)?;
        Ok(pos)
    }

    /// Places the current player's mark at an already-validated
    /// position, then updates the outcome and the turn.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);

        if let Some(winner) = rules::check_winner(&self.board) {
            debug!(%winner, "game won");
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            debug!("board full, game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
