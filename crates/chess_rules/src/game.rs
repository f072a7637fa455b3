//! Game state: turn order, captures, scores and the end-of-game classifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::{
    apply::PromotionChooser,
    board::Board,
    check::king_in_check,
    error::{GameError, Result},
    movegen::{can_castle, legal_destinations, legal_moves, legal_moves_for_piece},
    types::*,
};

/// Most captured pieces kept per side.
pub const MAX_CAPTURED: usize = 16;

/// Classification of the position after a ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Continue,
    Stalemate,
    /// White delivered mate.
    WhiteCheckmate,
    /// Black delivered mate.
    BlackCheckmate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Continue
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WhiteCheckmate => Some(Color::White),
            GameStatus::BlackCheckmate => Some(Color::Black),
            GameStatus::Continue | GameStatus::Stalemate => None,
        }
    }

    fn checkmate_by(color: Color) -> GameStatus {
        match color {
            Color::White => GameStatus::WhiteCheckmate,
            Color::Black => GameStatus::BlackCheckmate,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Continue => write!(f, "in progress"),
            GameStatus::Stalemate => write!(f, "Stalemate!"),
            GameStatus::WhiteCheckmate => write!(f, "White checkmate!"),
            GameStatus::BlackCheckmate => write!(f, "Black checkmate!"),
        }
    }
}

/// Classifies the position for the side about to move.
///
/// With no legal moves, a king in check is mate for the other side and
/// anything else is stalemate.
pub fn classify(board: &Board, to_move: Color) -> GameStatus {
    if !legal_moves(board, to_move).is_empty() {
        return GameStatus::Continue;
    }
    if king_in_check(board, to_move) {
        GameStatus::checkmate_by(to_move.other())
    } else {
        GameStatus::Stalemate
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    captured: [Vec<PieceKind>; 2],
    scores: [u32; 2],
    highlighted: [[bool; 8]; 8],
    status: GameStatus,
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }

    /// A game starting from an arbitrary position.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            captured: [Vec::new(), Vec::new()],
            scores: [0, 0],
            highlighted: [[false; 8]; 8],
            status: GameStatus::Continue,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Pieces `color` has taken, in capture order.
    pub fn captured(&self, color: Color) -> &[PieceKind] {
        &self.captured[color.idx()]
    }

    pub fn score(&self, color: Color) -> u32 {
        self.scores[color.idx()]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_highlighted(&self, sq: Square) -> bool {
        self.highlighted[sq.row as usize][sq.col as usize]
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.turn)
    }

    /// Destinations the piece on `from` can legally reach this turn.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.board, from, self.turn)
    }

    /// Marks the legal destinations of the piece on `from`. Returns how many.
    pub fn highlight_moves_from(&mut self, from: Square) -> usize {
        self.clear_highlights();
        let dests = self.legal_destinations(from);
        for sq in &dests {
            self.highlighted[sq.row as usize][sq.col as usize] = true;
        }
        dests.len()
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted = [[false; 8]; 8];
    }

    /// Whether `text` is a legal move for the side to move.
    pub fn is_legal(&self, text: &str) -> bool {
        self.legal_move(text).is_some()
    }

    fn legal_move(&self, text: &str) -> Option<Move> {
        let mv: Move = text.parse().ok()?;
        match mv {
            Move::Castle(side) => can_castle(&self.board, self.turn, side).then_some(mv),
            Move::Normal { from, .. } => {
                if self.board.color_at(from) != Some(self.turn) {
                    return None;
                }
                legal_moves_for_piece(&self.board, from)
                    .contains(&mv)
                    .then_some(mv)
            }
        }
    }

    /// Validates and plays `text` for the side to move.
    ///
    /// On success the captured list and score are updated, the position is
    /// classified for the opponent and, if the game goes on, the turn passes.
    /// A rejected move leaves the game untouched.
    pub fn play<P>(&mut self, text: &str, chooser: &mut P) -> Result<GameStatus>
    where
        P: PromotionChooser + ?Sized,
    {
        if self.status.is_over() {
            return Err(GameError::Finished(self.status));
        }
        let Some(mv) = self.legal_move(text) else {
            trace!(text, color = %self.turn, "move rejected");
            return Err(GameError::Rejected(text.to_string()));
        };

        let mover = self.turn;
        let applied = self.board.apply_permanent(mv, mover, chooser);
        debug!(%mv, color = %mover, "move applied");

        if let Some(pc) = applied.captured {
            self.book_capture(mover, pc.kind);
        }

        self.clear_highlights();
        self.status = classify(&self.board, mover.other());
        if self.status.is_over() {
            info!(status = %self.status, "game over");
        } else {
            self.turn = mover.other();
        }
        Ok(self.status)
    }

    fn book_capture(&mut self, mover: Color, kind: PieceKind) {
        let list = &mut self.captured[mover.idx()];
        if list.len() < MAX_CAPTURED {
            list.push(kind);
        } else {
            warn!(color = %mover, ?kind, "captured list full");
        }
        self.scores[mover.idx()] += kind.value();
        debug!(color = %mover, ?kind, score = self.scores[mover.idx()], "capture");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
