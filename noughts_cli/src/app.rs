//! The interactive game loop.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use noughts::Game;
use tracing::{debug, info};

use crate::console::Console;
use crate::ui;

/// Plays games until the player declines the replay prompt.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let mut game = Game::new();
    loop {
        play_game(&mut game, console)?;
        announce(&game, console)?;

        if !console.ask_replay()? {
            info!("replay declined, exiting");
            return Ok(());
        }
        game.reset();
    }
}

/// Plays a single game through to a win or a draw.
///
/// Rejected moves are reported and re-prompted; they never consume
/// the turn.
fn play_game<R: BufRead, W: Write>(game: &mut Game, console: &mut Console<R, W>) -> Result<()> {
    info!("starting game");
    while !game.is_over() {
        console.show_board(game.board())?;

        let raw = console
            .prompt_move(game.current_player())?
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
            .context("input closed while a game was in progress")?;

        match game.submit(&raw) {
            Ok(pos) => debug!(position = %pos, "move accepted"),
            Err(err) => {
                debug!(%err, "move rejected");
                console.report(&err)?;
            }
        }
    }
    Ok(())
}

/// Shows the final board and the result banner.
fn announce<R: BufRead, W: Write>(game: &Game, console: &mut Console<R, W>) -> Result<()> {
    console.show_board(game.board())?;
    match game.winner() {
        Some(winner) => console.say(&format!("\nPlayer {winner} has won the game!!"))?,
        None => console.say(ui::DRAW_MESSAGE)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Runs a whole session over scripted input, returning everything
    /// written to the output.
    fn run_session(lines: &str) -> String {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new(lines.to_string()), &mut output, 1);
        run(&mut console).expect("session should complete");
        drop(console);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_top_row_win_is_announced() {
        let output = run_session("0\n4\n1\n5\n2\nn\n");
        assert!(output.contains("Player X has won the game!!"));
        assert!(output.contains(ui::REPLAY_PROMPT));
    }

    #[test]
    fn test_full_board_is_a_draw() {
        let output = run_session("0\n1\n2\n4\n3\n5\n7\n6\n8\nn\n");
        assert!(output.contains(ui::DRAW_MESSAGE));
        assert!(!output.contains("has won the game"));
    }

    #[test]
    fn test_bad_input_is_reprompted_without_consuming_the_turn() {
        // X fumbles three times before opening; the game still plays
        // out as if the opening had been clean.
        let output = run_session("banana\n9\n0\n0\n4\n1\n5\n2\nn\n");
        assert!(output.contains(ui::INVALID_INPUT));
        assert!(output.contains(ui::OUT_OF_BOUNDS));
        assert!(output.contains(ui::POSITION_FILLED));
        assert!(output.contains("Player X has won the game!!"));
    }

    #[test]
    fn test_replay_resets_the_board() {
        let two_games = "0\n4\n1\n5\n2\ny\n6\n0\n7\n1\n8\nn\n";
        let output = run_session(two_games);
        assert_eq!(output.matches("Player X has won the game!!").count(), 2);
    }

    #[test]
    fn test_anything_but_y_declines_replay() {
        let output = run_session("0\n4\n1\n5\n2\nno thanks\n");
        assert_eq!(output.matches(ui::REPLAY_PROMPT).count(), 1);
    }

    #[test]
    fn test_end_of_input_at_replay_prompt_declines() {
        // Script ends right after the last move; the replay question
        // gets no answer and the session still exits cleanly.
        let output = run_session("0\n4\n1\n5\n2\n");
        assert!(output.contains(ui::REPLAY_PROMPT));
    }

    #[test]
    fn test_end_of_input_mid_game_is_an_error() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("0\n4\n".to_string()), &mut output, 1);
        assert!(run(&mut console).is_err());
    }
}
