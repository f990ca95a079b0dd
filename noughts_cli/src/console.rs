//! Blocking line-based terminal I/O.

use std::io::{self, BufRead, Write};

use noughts::{Board, MoveError, Player};

use crate::ui;

/// Line-based prompt console over a reader/writer pair.
///
/// Generic so the game loop runs over locked stdio in production and
/// over in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    padding: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with the given per-cell board padding.
    pub fn new(input: R, output: W, padding: usize) -> Self {
        Self {
            input,
            output,
            padding,
        }
    }

    /// Draws the board.
    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{}", ui::board_to_string(board, self.padding))?;
        self.output.flush()
    }

    /// Writes a status line.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    /// Prompts the current player for a move and returns the raw
    /// trimmed line, or `None` when the input stream has ended.
    pub fn prompt_move(&mut self, player: Player) -> io::Result<Option<String>> {
        self.prompt(&format!(
            "Player {player}, please enter the index of your next move: "
        ))
    }

    /// Asks the replay question; only an exact `y` means yes. End of
    /// input counts as declining.
    pub fn ask_replay(&mut self) -> io::Result<bool> {
        Ok(self
            .prompt(ui::REPLAY_PROMPT)?
            .is_some_and(|answer| answer == "y"))
    }

    /// Shows the message matching a rejected move.
    pub fn report(&mut self, err: &MoveError) -> io::Result<()> {
        let message = match err {
            MoveError::InvalidFormat(_) => ui::INVALID_INPUT,
            MoveError::OutOfBounds(_) => ui::OUT_OF_BOUNDS,
            MoveError::CellOccupied(_) => ui::POSITION_FILLED,
            // The interactive loop stops before the game can reject a
            // move for being over; fall back to the error's own text.
            MoveError::GameOver => return self.say(&err.to_string()),
        };
        self.say(message)
    }

    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
