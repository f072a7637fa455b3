//! Text rendering of a game: captured pieces, scores, the board and the turn.

use std::fmt;

use chess_rules::{Color, Game, Piece, Square};
use colored::Colorize;

use crate::config::ConsoleConfig;

/// Displays a game the way the console shows it between prompts.
pub struct BoardView<'a> {
    game: &'a Game,
    config: &'a ConsoleConfig,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a Game, config: &'a ConsoleConfig) -> Self {
        Self { game, config }
    }

    fn flipped(&self) -> bool {
        self.config.flip_board && self.game.turn() == Color::Black
    }

    fn side_summary(&self, f: &mut fmt::Formatter<'_>, color: Color) -> fmt::Result {
        // Pieces taken by `color` belong to the other side.
        let taken: String = self
            .game
            .captured(color)
            .iter()
            .map(|&kind| Piece::new(color.other(), kind).letter())
            .collect();
        writeln!(f, "{color}")?;
        writeln!(f, "{taken} ({})", self.game.score(color))
    }

    fn cell(&self, sq: Square) -> String {
        let piece = self.game.board().get(sq);
        let highlighted = self.game.is_highlighted(sq);
        let letter = match piece {
            Some(pc) => pc.letter(),
            None if highlighted && !self.config.color => '*',
            None => '.',
        };

        if !self.config.color {
            return letter.to_string();
        }
        let text = letter.to_string();
        let styled = match piece {
            Some(pc) if pc.color == Color::White => text.bright_white().bold(),
            Some(_) => text.bright_red().bold(),
            None => text.normal(),
        };
        if highlighted {
            styled.on_green().to_string()
        } else {
            styled.to_string()
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flipped = self.flipped();
        let order: Vec<u8> = if flipped {
            (0..8).rev().collect()
        } else {
            (0..8).collect()
        };
        let (top, bottom) = if flipped {
            (Color::White, Color::Black)
        } else {
            (Color::Black, Color::White)
        };

        self.side_summary(f, top)?;
        writeln!(f)?;

        write!(f, "  ( ")?;
        for &col in &order {
            write!(f, "{} ", (b'a' + col) as char)?;
        }
        writeln!(f, ")")?;

        for &row in &order {
            write!(f, "({}) ", Square::new(row, 0).rank_char())?;
            for &col in &order {
                write!(f, "{} ", self.cell(Square::new(row, col)))?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        self.side_summary(f, bottom)?;
        writeln!(f)?;
        writeln!(f, "{}'s turn.", self.game.turn())
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
