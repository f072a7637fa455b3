//! Error types for chess_rules

use thiserror::Error;

use crate::game::GameStatus;

/// Text that does not name a square, move or promotion piece.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square `{0}`")]
    Square(String),

    #[error("invalid move `{0}`")]
    Move(String),

    #[error("invalid promotion piece `{0}` (expected one of q, r, b, n)")]
    Promotion(String),
}

/// Malformed board diagram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("invalid piece letter `{0}`")]
    PieceLetter(char),

    #[error("rank {rank} describes {files} files")]
    RankWidth { rank: usize, files: usize },
}

/// Why a submitted move was not played.
///
/// Malformed text and rule violations are deliberately reported the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("move `{0}` rejected")]
    Rejected(String),

    #[error("game is over: {0}")]
    Finished(GameStatus),
}

pub type Result<T> = std::result::Result<T, GameError>;
