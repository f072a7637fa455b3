//! Line-based input: move entry, square highlighting and promotion choice.

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use chess_rules::{Color, Move, Promotion, PromotionChooser, Square};
use tracing::{debug, warn};

pub const MOVE_PROMPT: &str = "Enter a move (e.g. e2e4, KCSL, QCSL) or a square to see its moves:";
pub const PROMOTION_PROMPT: &str = "Pawn promotion! Enter a new piece type (q, r, b, n):";

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Show where the piece on this square can go.
    Highlight(Square),
    /// A coordinate pair or a castle token, not yet checked for legality.
    Move(String),
}

/// Classifies a trimmed input line. `None` for anything unrecognised.
pub fn parse_input(line: &str) -> Option<Input> {
    let text = line.trim();
    match text.len() {
        2 => text.parse().ok().map(Input::Highlight),
        // Castle tokens parse as moves too.
        4 => text
            .parse::<Move>()
            .ok()
            .map(|_| Input::Move(text.to_string())),
        _ => None,
    }
}

/// Reads player lines from `input` and writes prompts and boards to `output`.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    pub fn show(&mut self, view: &impl fmt::Display) -> io::Result<()> {
        write!(self.output, "{view}")?;
        self.output.flush()
    }

    /// Prints `prompt` and reads one trimmed line. `None` once input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> PromotionChooser for LinePrompt<R, W> {
    fn choose(&mut self, color: Color) -> Promotion {
        loop {
            match self.read_line(PROMOTION_PROMPT) {
                Ok(Some(line)) => match line.parse() {
                    Ok(promotion) => return promotion,
                    Err(err) => debug!(%err, "bad promotion choice"),
                },
                Ok(None) => {
                    warn!(%color, "input closed during promotion, taking a queen");
                    return Promotion::Queen;
                }
                Err(err) => {
                    warn!(%err, "failed to read promotion choice, taking a queen");
                    return Promotion::Queen;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
