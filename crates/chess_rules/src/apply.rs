//! Putting moves on the board.
//!
//! Transient application only relocates pieces and hands back what it
//! overwrote, so `reverse_transient` can restore the exact prior board.
//! Permanent application additionally promotes pawns and updates castling
//! rights; score bookkeeping is left to the caller via [`Applied`].

use tracing::debug;

use crate::{board::Board, types::*};

/// Supplies the piece a pawn promotes to.
///
/// Called synchronously while the move is being applied; the move is not
/// finished until a choice is returned.
pub trait PromotionChooser {
    fn choose(&mut self, color: Color) -> Promotion;
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color) -> Promotion,
{
    fn choose(&mut self, color: Color) -> Promotion {
        self(color)
    }
}

/// Side effects of a permanent move that the game has to book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub captured: Option<Piece>,
    pub promoted: Option<PieceKind>,
}

/// King and rook squares for a castle: (king_from, king_to, rook_from, rook_to).
fn castle_squares(color: Color, side: CastleSide) -> (Square, Square, Square, Square) {
    let row = color.home_row();
    (
        Square::new(row, 4),
        Square::new(row, side.king_dest_col()),
        Square::new(row, side.rook_home_col()),
        Square::new(row, side.rook_dest_col()),
    )
}

impl Board {
    /// Relocates pieces for `mv` without any bookkeeping.
    ///
    /// Returns the piece that stood on the destination (always `None` for
    /// castles). Must be undone with [`Board::reverse_transient`] before the
    /// board is observed for anything else.
    pub fn apply_transient(&mut self, mv: Move, color: Color) -> Option<Piece> {
        match mv {
            Move::Castle(side) => {
                self.castle(color, side);
                None
            }
            Move::Normal { from, to } => {
                let overwritten = self.get(to);
                self.set(to, self.get(from));
                self.set(from, None);
                overwritten
            }
        }
    }

    /// Exact inverse of [`Board::apply_transient`].
    pub fn reverse_transient(&mut self, mv: Move, color: Color, overwritten: Option<Piece>) {
        match mv {
            Move::Castle(side) => {
                let (king_from, king_to, rook_from, rook_to) = castle_squares(color, side);
                self.set(king_from, self.get(king_to));
                self.set(rook_from, self.get(rook_to));
                self.set(king_to, None);
                self.set(rook_to, None);
            }
            Move::Normal { from, to } => {
                self.set(from, self.get(to));
                self.set(to, overwritten);
            }
        }
    }

    /// Plays `mv` for `color` for good: promotion and castling rights included.
    ///
    /// The move must already be known to be legal.
    ///
    /// # Panics
    ///
    /// If a coordinate move starts on an empty square.
    pub fn apply_permanent<P>(&mut self, mv: Move, color: Color, chooser: &mut P) -> Applied
    where
        P: PromotionChooser + ?Sized,
    {
        let (from, to) = match mv {
            Move::Castle(side) => {
                self.castle(color, side);
                self.castling.revoke(color, CastleSide::King);
                self.castling.revoke(color, CastleSide::Queen);
                debug!(%color, ?side, "castled");
                return Applied {
                    captured: None,
                    promoted: None,
                };
            }
            Move::Normal { from, to } => (from, to),
        };

        let moved = self.get(from).expect("no piece on from-square");
        let captured = self.get(to);

        let mut placed = moved;
        let mut promoted = None;
        if moved.kind == PieceKind::Pawn && to.row == color.other().home_row() {
            let kind = chooser.choose(color).kind();
            placed = Piece::new(color, kind);
            promoted = Some(kind);
            debug!(%color, square = %to, ?kind, "pawn promoted");
        }

        self.set(to, Some(placed));
        self.set(from, None);
        self.update_castling(moved, from, captured, to);

        Applied { captured, promoted }
    }

    fn castle(&mut self, color: Color, side: CastleSide) {
        let (king_from, king_to, rook_from, rook_to) = castle_squares(color, side);
        self.set(rook_to, self.get(rook_from));
        self.set(king_to, self.get(king_from));
        self.set(king_from, None);
        self.set(rook_from, None);
    }

    fn update_castling(&mut self, moved: Piece, from: Square, captured: Option<Piece>, to: Square) {
        let home = |color: Color, sq: Square, side: CastleSide| {
            sq == Square::new(color.home_row(), side.rook_home_col())
        };

        match moved.kind {
            PieceKind::King => {
                self.castling.revoke(moved.color, CastleSide::King);
                self.castling.revoke(moved.color, CastleSide::Queen);
            }
            PieceKind::Rook => {
                for side in [CastleSide::King, CastleSide::Queen] {
                    if home(moved.color, from, side) {
                        self.castling.revoke(moved.color, side);
                    }
                }
            }
            _ => {}
        }

        // A rook taken on its corner can no longer castle.
        if let Some(cp) = captured
            && cp.kind == PieceKind::Rook
        {
            for side in [CastleSide::King, CastleSide::Queen] {
                if home(cp.color, to, side) {
                    self.castling.revoke(cp.color, side);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod tests;
