//! Rules engine for standard chess.
//!
//! Board state, pseudo-legal and legal move generation, check detection,
//! castling, promotion, capture bookkeeping and checkmate/stalemate
//! classification. Rendering and prompting live outside this crate and talk
//! to it through [`Game`].

pub mod apply;
pub mod board;
pub mod check;
pub mod error;
pub mod game;
pub mod movegen;
pub mod types;

// Re-export the rules surface
pub use apply::{Applied, PromotionChooser};
pub use board::*;
pub use check::*;
pub use error::{BoardError, GameError, ParseError};
pub use game::*;
pub use movegen::*;
pub use types::*;
