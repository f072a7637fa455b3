//! Check detection.
//!
//! `king_in_check` asks whether any pseudo-legal move of the opponent lands on
//! the king. `square_attacked` answers the same question for an arbitrary
//! square, empty or not, by looking outward from it; castling uses it for the
//! squares the king passes over.

use crate::{board::Board, movegen::pseudo_piece_moves, types::*};

/// True if `color`'s king is attacked by any piece of the other side.
///
/// # Panics
///
/// If `color` has no king on the board. A game reached through legal play
/// always has one.
pub fn king_in_check(board: &Board, color: Color) -> bool {
    let ksq = board
        .king_square(color)
        .unwrap_or_else(|| panic!("no {color} king on the board"));
    pseudo_piece_moves(board, color.other())
        .iter()
        .any(|mv| mv.dest() == Some(ksq))
}

/// Transiently plays `mv` for `color`, tests for check, and restores the board.
pub fn leaves_king_in_check(board: &mut Board, mv: Move, color: Color) -> bool {
    let overwritten = board.apply_transient(mv, color);
    let in_check = king_in_check(board, color);
    board.reverse_transient(mv, color, overwritten);
    in_check
}

/// True if a piece of color `by` could capture on `target`.
pub fn square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let attacker = |sq: Option<Square>, kinds: &[PieceKind]| {
        sq.and_then(|s| board.get(s))
            .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
    };

    // Pawns attack toward the opposite back rank, so look one row behind.
    let pawn_row: i8 = match by {
        Color::White => 1,
        Color::Black => -1,
    };
    for dc in [-1, 1] {
        if attacker(target.offset(pawn_row, dc), &[PieceKind::Pawn]) {
            return true;
        }
    }

    let knight = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    if knight
        .iter()
        .any(|&(dr, dc)| attacker(target.offset(dr, dc), &[PieceKind::Knight]))
    {
        return true;
    }

    let king = [
        (1, 1),
        (1, 0),
        (1, -1),
        (0, 1),
        (0, -1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];
    if king
        .iter()
        .any(|&(dr, dc)| attacker(target.offset(dr, dc), &[PieceKind::King]))
    {
        return true;
    }

    let diag = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
    let ortho = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    let sliders: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
        (&diag, [PieceKind::Bishop, PieceKind::Queen]),
        (&ortho, [PieceKind::Rook, PieceKind::Queen]),
    ];
    for (dirs, kinds) in sliders {
        for &(dr, dc) in dirs {
            let mut cur = target;
            while let Some(next) = cur.offset(dr, dc) {
                if let Some(pc) = board.get(next) {
                    if pc.color == by && kinds.contains(&pc.kind) {
                        return true;
                    }
                    break;
                }
                cur = next;
            }
        }
    }

    false
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
