//! The interactive game loop.

use std::io::{self, BufRead, Write};

use chess_rules::{Game, GameStatus};
use tracing::debug;

use crate::{
    config::ConsoleConfig,
    prompt::{Input, LinePrompt, MOVE_PROMPT, parse_input},
    render::BoardView,
};

const HELP: &str =
    "Enter a coordinate pair (e2e4), a castle token (KCSL or QCSL) or a square to highlight (e2).";

/// Plays `game` until it ends or input runs out.
///
/// Returns the final status, or `None` if the player left mid-game.
pub fn run<R, W>(
    game: &mut Game,
    config: &ConsoleConfig,
    prompt: &mut LinePrompt<R, W>,
) -> io::Result<Option<GameStatus>>
where
    R: BufRead,
    W: Write,
{
    loop {
        prompt.show(&BoardView::new(game, config))?;
        // Highlights only survive one redraw.
        game.clear_highlights();

        let Some(line) = prompt.read_line(MOVE_PROMPT)? else {
            return Ok(None);
        };

        match parse_input(&line) {
            Some(Input::Highlight(sq)) => {
                let count = game.highlight_moves_from(sq);
                debug!(square = %sq, count, "highlighting destinations");
            }
            Some(Input::Move(text)) => match game.play(&text, prompt) {
                Ok(status) if status.is_over() => {
                    prompt.show(&BoardView::new(game, config))?;
                    prompt.say(&status.to_string())?;
                    return Ok(Some(status));
                }
                Ok(_) => {}
                Err(err) => {
                    debug!(%err, "move refused");
                    prompt.say("Illegal move, try again.")?;
                }
            },
            None => prompt.say(HELP)?,
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
