//! Two-player tic-tac-toe played through a terminal prompt loop.

#![warn(missing_docs)]

mod app;
mod cli;
mod console;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use console::Console;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so RUST_LOG output cannot interleave
    // with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!(padding = cli.padding, "starting noughts");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut console = Console::new(stdin, stdout, cli.padding);
    app::run(&mut console)
}
