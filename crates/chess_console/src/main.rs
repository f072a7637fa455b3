//! Two-player chess in the terminal.
//!
//! Usage: `chess_console [CONFIG]`. Settings come from the TOML file named
//! on the command line, or `chess_console.toml` in the working directory.

mod config;
mod prompt;
mod render;
mod session;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use chess_rules::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{ConsoleConfig, DEFAULT_CONFIG_PATH};
use prompt::LinePrompt;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = ConsoleConfig::load(&path)?;

    // Logs go to stderr so they never interleave with the board.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if !config.color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompt = LinePrompt::new(stdin.lock(), stdout.lock());

    prompt.say("Welcome to chess!")?;
    let mut game = Game::new();
    let status = session::run(&mut game, &config, &mut prompt).context("console i/o failed")?;
    match status {
        Some(status) => info!(%status, "game finished"),
        None => info!("input closed before the game ended"),
    }
    prompt.say("Thanks for playing!")?;

    let mut out = prompt.into_output();
    out.flush()?;
    Ok(())
}
