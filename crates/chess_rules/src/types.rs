use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Token for a king-side castle.
pub const KING_SIDE_CASTLE: &str = "KCSL";
/// Token for a queen-side castle.
pub const QUEEN_SIDE_CASTLE: &str = "QCSL";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row of this color's back rank.
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value credited to the capturing side. Kings are never captured.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn is_white(self) -> bool {
        self.color == Color::White
    }

    /// Diagram letter: upper case for White, lower case for Black.
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

/// Pieces a pawn may promote to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Promotion {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Promotion {
    pub fn kind(self) -> PieceKind {
        match self {
            Promotion::Knight => PieceKind::Knight,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Queen => PieceKind::Queen,
        }
    }
}

impl FromStr for Promotion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ParseError::Promotion(s.to_string()));
        };
        match c.to_ascii_lowercase() {
            'n' => Ok(Promotion::Knight),
            'b' => Ok(Promotion::Bishop),
            'r' => Ok(Promotion::Rook),
            'q' => Ok(Promotion::Queen),
            _ => Err(ParseError::Promotion(s.to_string())),
        }
    }
}

/// A board coordinate. Row 0 is rank 8, column 0 is file `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Checked construction from signed offsets; `None` when off the board.
    pub fn at(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Square shifted by `(dr, dc)`, if it stays on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::at(self.row as i8 + dr, self.col as i8 + dc)
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// All 64 squares in board scan order (row-major, columns ascending).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }

    fn from_bytes(file: u8, rank: u8) -> Option<Square> {
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::new(b'8' - rank, file - b'a'))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [file, rank] => {
                Square::from_bytes(*file, *rank).ok_or_else(|| ParseError::Square(s.to_string()))
            }
            _ => Err(ParseError::Square(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// Column the rook starts on.
    pub fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }
    /// Column the king lands on.
    pub fn king_dest_col(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }
    /// Column the rook lands on.
    pub fn rook_dest_col(self) -> u8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }
    /// Columns that must be empty between king and rook.
    pub fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::King => &[5, 6],
            CastleSide::Queen => &[1, 2, 3],
        }
    }
    /// Columns the king stands on, crosses or lands on.
    pub fn king_path_cols(self) -> &'static [u8] {
        match self {
            CastleSide::King => &[4, 5, 6],
            CastleSide::Queen => &[4, 3, 2],
        }
    }
}

/// A move: either a coordinate pair or one of the two castles of the side on move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Normal { from: Square, to: Square },
    Castle(CastleSide),
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move::Normal { from, to }
    }

    /// Destination of a coordinate move. Castles report `None`.
    pub fn dest(self) -> Option<Square> {
        match self {
            Move::Normal { to, .. } => Some(to),
            Move::Castle(_) => None,
        }
    }

    pub fn source(self) -> Option<Square> {
        match self {
            Move::Normal { from, .. } => Some(from),
            Move::Castle(_) => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Normal { from, to } => write!(f, "{from}{to}"),
            Move::Castle(CastleSide::King) => f.write_str(KING_SIDE_CASTLE),
            Move::Castle(CastleSide::Queen) => f.write_str(QUEEN_SIDE_CASTLE),
        }
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Castle tokens are checked before coordinates.
        match s {
            KING_SIDE_CASTLE => return Ok(Move::Castle(CastleSide::King)),
            QUEEN_SIDE_CASTLE => return Ok(Move::Castle(CastleSide::Queen)),
            _ => {}
        }
        match s.as_bytes() {
            [f1, r1, f2, r2] => {
                let from = Square::from_bytes(*f1, *r1);
                let to = Square::from_bytes(*f2, *r2);
                match (from, to) {
                    (Some(from), Some(to)) => Ok(Move::Normal { from, to }),
                    _ => Err(ParseError::Move(s.to_string())),
                }
            }
            _ => Err(ParseError::Move(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
