//! Board rendering and fixed message texts.

use noughts::{Board, Square};

/// Shown when the input does not parse as a number.
pub const INVALID_INPUT: &str = "Wrong input. Please try again";
/// Shown when the parsed index is outside the board.
pub const OUT_OF_BOUNDS: &str = "Position out of bounds. Please try again.";
/// Shown when the chosen square is already taken.
pub const POSITION_FILLED: &str = "Position already filled. Please try again.";
/// Shown when the board fills with no line completed.
pub const DRAW_MESSAGE: &str = "The game ended in a draw.";
/// Asked after each finished game; only `y` starts another.
pub const REPLAY_PROMPT: &str = "Do you wish to play again? [y/N] ";

/// Renders the board as a 3x3 text grid.
///
/// Each cell holds the occupying mark (a space when empty) with
/// `padding` spaces on either side; columns are joined with `|` and
/// rows are separated by a dash divider sized to the row width. A
/// blank line precedes and follows the grid.
pub fn board_to_string(board: &Board, padding: usize) -> String {
    let pad = " ".repeat(padding);
    let divider = "-".repeat(3 * (2 * padding + 1) + 2);

    let mut out = String::from("\n");
    for (row_index, row) in board.rows().enumerate() {
        if row_index != 0 {
            out.push_str(&divider);
            out.push('\n');
        }
        let cells: Vec<String> = row
            .iter()
            .map(|square| {
                let mark = match square {
                    Square::Empty => ' ',
                    Square::Occupied(player) => player.mark(),
                };
                format!("{pad}{mark}{pad}")
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out.push('\n');
    out
}
