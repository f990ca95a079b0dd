//! Command-line interface for the noughts binary.

use clap::Parser;

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe played through a terminal prompt loop", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Spaces on either side of each mark when drawing the board
    #[arg(long, default_value_t = 1)]
    pub padding: usize,
}
