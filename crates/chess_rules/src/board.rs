use std::fmt;

use crate::error::BoardError;
use crate::types::*;

/// Which castles each side may still make.
///
/// A right is lost for good once the king or the matching rook leaves its home
/// square, or the rook is captured there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::King) => self.wk,
            (Color::White, CastleSide::Queen) => self.wq,
            (Color::Black, CastleSide::King) => self.bk,
            (Color::Black, CastleSide::Queen) => self.bq,
        }
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        *self.flag_mut(color, side) = false;
    }

    fn grant(&mut self, color: Color, side: CastleSide) {
        *self.flag_mut(color, side) = true;
    }

    fn flag_mut(&mut self, color: Color, side: CastleSide) -> &mut bool {
        match (color, side) {
            (Color::White, CastleSide::King) => &mut self.wk,
            (Color::White, CastleSide::Queen) => &mut self.wq,
            (Color::Black, CastleSide::King) => &mut self.bk,
            (Color::Black, CastleSide::Queen) => &mut self.bq,
        }
    }

    fn swapped(self) -> CastlingRights {
        CastlingRights {
            wk: self.bk,
            wq: self.bq,
            bk: self.wk,
            bq: self.wq,
        }
    }
}

/// The 8×8 grid plus the castling rights that depend on its history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
    pub castling: CastlingRights,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            castling: CastlingRights::NONE,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            b.set(Square::new(0, col), Some(Piece::new(Color::Black, kind)));
            b.set(Square::new(1, col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            b.set(Square::new(6, col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            b.set(Square::new(7, col), Some(Piece::new(Color::White, kind)));
        }
        b.castling = CastlingRights::ALL;
        b
    }

    /// Parses the piece-placement field of a FEN string ("rnbqkbnr/pppppppp/8/...").
    ///
    /// Anything after the first whitespace is ignored. Castling rights are
    /// granted wherever a king and rook stand on their home squares.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let placement = diagram.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::RankCount(ranks.len()));
        }

        let mut b = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                    continue;
                }
                let pc = Piece::from_letter(ch).ok_or(BoardError::PieceLetter(ch))?;
                if col >= 8 {
                    return Err(BoardError::RankWidth {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                b.set(Square::new(row as u8, col as u8), Some(pc));
                col += 1;
            }
            if col != 8 {
                return Err(BoardError::RankWidth {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        b.castling = CastlingRights::NONE;
        for color in [Color::White, Color::Black] {
            let row = color.home_row();
            let king = Piece::new(color, PieceKind::King);
            let rook = Piece::new(color, PieceKind::Rook);
            if b.get(Square::new(row, 4)) != Some(king) {
                continue;
            }
            for side in [CastleSide::King, CastleSide::Queen] {
                if b.get(Square::new(row, side.rook_home_col())) == Some(rook) {
                    b.castling.grant(color, side);
                }
            }
        }
        Ok(b)
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row as usize][sq.col as usize]
    }

    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.row as usize][sq.col as usize] = pc;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|pc| pc.color)
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        let king = Piece::new(c, PieceKind::King);
        Square::all().find(|&sq| self.get(sq) == Some(king))
    }

    /// Occupied squares with their pieces, in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|pc| (sq, pc)))
    }

    /// The same position seen from the other side: ranks flipped, colors swapped.
    pub fn mirrored(&self) -> Board {
        let mut b = Board::empty();
        for (sq, pc) in self.pieces() {
            b.set(
                Square::new(7 - sq.row, sq.col),
                Some(Piece::new(pc.color.other(), pc.kind)),
            );
        }
        b.castling = self.castling.swapped();
        b
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let ch = self.get(Square::new(row, col)).map_or('.', Piece::letter);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
