use crate::{board::Board, check, types::*};

const ROOK_DIRS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// What a sliding piece finds on the next square of its ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayStep {
    /// Empty; the ray continues.
    Open,
    /// Enemy piece; the square is a capture and the ray ends.
    Capture,
    /// Friendly piece; the ray ends before this square.
    Blocked,
}

fn ray_step(board: &Board, to: Square, mover: Color) -> RayStep {
    match board.color_at(to) {
        None => RayStep::Open,
        Some(c) if c != mover => RayStep::Capture,
        Some(_) => RayStep::Blocked,
    }
}

/// Generate all legal moves for `color`, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the board only once.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::new();
    legal_moves_into(&mut tmp, color, &mut out);
    out
}

/// Generate all legal moves for `color` into the provided buffer, castles last.
pub fn legal_moves_into(board: &mut Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves_into(board, color, out);
    out.retain(|&mv| !check::leaves_king_in_check(board, mv, color));
}

/// Legal coordinate moves of the piece on `from`. Castles are not included.
pub fn legal_moves_for_piece(board: &Board, from: Square) -> Vec<Move> {
    let Some(pc) = board.get(from) else {
        return Vec::new();
    };
    let mut tmp = board.clone();
    let mut out = Vec::new();
    piece_moves_into(&tmp, from, pc, &mut out);
    out.retain(|&mv| !check::leaves_king_in_check(&mut tmp, mv, pc.color));
    out
}

/// Destinations reachable by a legal move of the piece on `from`, provided it
/// belongs to `to_move`.
pub fn legal_destinations(board: &Board, from: Square, to_move: Color) -> Vec<Square> {
    if board.color_at(from) != Some(to_move) {
        return Vec::new();
    }
    legal_moves_for_piece(board, from)
        .into_iter()
        .filter_map(Move::dest)
        .collect()
}

/// All pseudo-legal moves for `color`: piece moves in scan order, then castles.
pub fn pseudo_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::new();
    pseudo_moves_into(board, color, &mut out);
    out
}

fn pseudo_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    pseudo_piece_moves_into(board, color, out);
    for side in [CastleSide::King, CastleSide::Queen] {
        if can_castle(board, color, side) {
            out.push(Move::Castle(side));
        }
    }
}

/// Pseudo-legal coordinate moves for every piece of `color`, without castles.
pub fn pseudo_piece_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::new();
    pseudo_piece_moves_into(board, color, &mut out);
    out
}

fn pseudo_piece_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    for (from, pc) in board.pieces() {
        if pc.color == color {
            piece_moves_into(board, from, pc, out);
        }
    }
}

/// Pseudo-legal moves of the piece on `from`.
pub fn pseudo_moves_for_piece(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(pc) = board.get(from) {
        piece_moves_into(board, from, pc, &mut out);
    }
    out
}

fn piece_moves_into(board: &Board, from: Square, pc: Piece, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, out, &KNIGHT_DELTAS),
        PieceKind::Bishop => gen_slider(board, from, pc.color, out, &BISHOP_DIRS),
        PieceKind::Rook => gen_slider(board, from, pc.color, out, &ROOK_DIRS),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, out, &ROOK_DIRS);
            gen_slider(board, from, pc.color, out, &BISHOP_DIRS);
        }
        PieceKind::King => gen_steps(board, from, pc.color, out, &KING_DELTAS),
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let (dir, start_row): (i8, u8) = match c {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };

    let single = from.offset(dir, 0).filter(|&to| board.is_empty(to));

    // double step needs both squares empty
    if from.row == start_row
        && single.is_some()
        && let Some(to) = from.offset(2 * dir, 0)
        && board.is_empty(to)
    {
        out.push(Move::new(from, to));
    }

    if let Some(to) = single {
        out.push(Move::new(from, to));
    }

    for dc in [1, -1] {
        if let Some(to) = from.offset(dir, dc)
            && ray_step(board, to, c) == RayStep::Capture
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc)
            && ray_step(board, to, c) != RayStep::Blocked
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match ray_step(board, to, c) {
                RayStep::Open => out.push(Move::new(from, to)),
                RayStep::Capture => {
                    out.push(Move::new(from, to));
                    break;
                }
                RayStep::Blocked => break,
            }
            cur = to;
        }
    }
}

/// Whether `color` may castle on `side` right now.
///
/// King and rook must be on their home squares with the right still held, the
/// squares between them empty, and none of the squares the king starts on,
/// crosses or lands on attacked.
pub fn can_castle(board: &Board, color: Color, side: CastleSide) -> bool {
    if !board.castling.has(color, side) {
        return false;
    }

    let row = color.home_row();
    let king = Piece::new(color, PieceKind::King);
    let rook = Piece::new(color, PieceKind::Rook);
    if board.get(Square::new(row, 4)) != Some(king)
        || board.get(Square::new(row, side.rook_home_col())) != Some(rook)
    {
        return false;
    }

    if !side
        .between_cols()
        .iter()
        .all(|&col| board.is_empty(Square::new(row, col)))
    {
        return false;
    }

    let enemy = color.other();
    side.king_path_cols()
        .iter()
        .all(|&col| !check::square_attacked(board, Square::new(row, col), enemy))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod tests;
