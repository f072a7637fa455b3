use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn moves(list: &[&str]) -> Vec<Move> {
    list.iter().map(|s| mv(s)).collect()
}

fn board(diagram: &str) -> Board {
    Board::from_diagram(diagram).unwrap()
}

#[test]
fn test_startpos_moves() {
    let b = Board::startpos();
    // Starting position has 20 legal moves for either side
    assert_eq!(legal_moves(&b, Color::White).len(), 20);
    assert_eq!(legal_moves(&b, Color::Black).len(), 20);
}

#[test]
fn test_pawn_move_order() {
    // Enemy knights on d3 and f3 give the e2 pawn both captures
    let b = board("4k3/8/8/8/8/3n1n2/4P3/4K3");
    assert_eq!(
        pseudo_moves_for_piece(&b, sq("e2")),
        moves(&["e2e4", "e2e3", "e2f3", "e2d3"])
    );
}

#[test]
fn test_black_pawn_moves_down_the_board() {
    let b = board("4k3/3p4/8/8/8/8/8/4K3");
    assert_eq!(pseudo_moves_for_piece(&b, sq("d7")), moves(&["d7d5", "d7d6"]));
}

#[test]
fn test_pawn_double_step_needs_empty_intermediate_square() {
    let b = board("4k3/8/8/8/8/4n3/4P3/4K3");
    assert!(pseudo_moves_for_piece(&b, sq("e2")).is_empty());
}

#[test]
fn test_pawn_does_not_capture_forward_or_friendly() {
    let b = board("4k3/8/8/8/4p3/3P1P2/4P3/4K3");
    // e4 holds an enemy pawn straight ahead, d3 and f3 are friendly
    let got = pseudo_moves_for_piece(&b, sq("e2"));
    assert_eq!(got, moves(&["e2e3"]));
}

#[test]
fn test_knight_in_corner() {
    let mut b = Board::empty();
    b.set(sq("a1"), Some(Piece::new(Color::White, PieceKind::Knight)));
    assert_eq!(pseudo_moves_for_piece(&b, sq("a1")), moves(&["a1c2", "a1b3"]));
}

#[test]
fn test_knight_skips_friendly_keeps_enemy() {
    let mut b = Board::empty();
    b.set(sq("a1"), Some(Piece::new(Color::White, PieceKind::Knight)));
    b.set(sq("c2"), Some(Piece::new(Color::White, PieceKind::Pawn)));
    b.set(sq("b3"), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert_eq!(pseudo_moves_for_piece(&b, sq("a1")), moves(&["a1b3"]));
}

#[test]
fn test_rook_ray_stops_at_first_piece() {
    let mut b = Board::empty();
    b.set(sq("a1"), Some(Piece::new(Color::White, PieceKind::Rook)));
    b.set(sq("a3"), Some(Piece::new(Color::White, PieceKind::Pawn)));
    b.set(sq("c1"), Some(Piece::new(Color::Black, PieceKind::Knight)));
    // left, right, up, down
    assert_eq!(
        pseudo_moves_for_piece(&b, sq("a1")),
        moves(&["a1b1", "a1c1", "a1a2"])
    );
}

#[test]
fn test_sliders_on_empty_board() {
    let mut b = Board::empty();
    b.set(sq("d4"), Some(Piece::new(Color::White, PieceKind::Queen)));
    b.set(sq("e4"), Some(Piece::new(Color::Black, PieceKind::Bishop)));
    b.set(sq("h8"), Some(Piece::new(Color::Black, PieceKind::Rook)));
    // queen: 27 minus the 3 squares beyond the bishop on e4
    assert_eq!(pseudo_moves_for_piece(&b, sq("d4")).len(), 24);
    assert_eq!(pseudo_moves_for_piece(&b, sq("e4")).len(), 13);
    assert_eq!(pseudo_moves_for_piece(&b, sq("h8")).len(), 14);
}

#[test]
fn test_ray_step_classification() {
    let b = Board::startpos();
    assert_eq!(ray_step(&b, sq("e4"), Color::White), RayStep::Open);
    assert_eq!(ray_step(&b, sq("e7"), Color::White), RayStep::Capture);
    assert_eq!(ray_step(&b, sq("e2"), Color::White), RayStep::Blocked);
}

#[test]
fn test_king_steps() {
    let b = board("4k3/8/8/8/8/8/3P4/4K3");
    let got = pseudo_moves_for_piece(&b, sq("e1"));
    assert_eq!(got, moves(&["e1f1", "e1d1", "e1e2", "e1f2"]));
}

#[test]
fn test_castles_are_appended_last() {
    let b = board("4k3/8/8/8/8/8/8/R3K2R");
    let all = legal_moves(&b, Color::White);
    let n = all.len();
    assert_eq!(all[n - 2], Move::Castle(CastleSide::King));
    assert_eq!(all[n - 1], Move::Castle(CastleSide::Queen));
}

#[test]
fn test_can_castle_both_sides() {
    let b = board("r3k2r/8/8/8/8/8/8/R3K2R");
    for color in [Color::White, Color::Black] {
        assert!(can_castle(&b, color, CastleSide::King));
        assert!(can_castle(&b, color, CastleSide::Queen));
    }
}

#[test]
fn test_queen_side_castle_needs_b_file_empty() {
    let b = board("4k3/8/8/8/8/8/8/RN2K2R");
    assert!(!can_castle(&b, Color::White, CastleSide::Queen));
    assert!(can_castle(&b, Color::White, CastleSide::King));
}

#[test]
fn test_castle_blocked_by_attacked_path() {
    // Black rook on f8 covers f1
    let b = board("4kr2/8/8/8/8/8/8/R3K2R");
    assert!(!can_castle(&b, Color::White, CastleSide::King));
    assert!(can_castle(&b, Color::White, CastleSide::Queen));
}

#[test]
fn test_queen_side_castle_allows_attacked_b_file() {
    // Black rook on b8 only covers b1, which the king never crosses
    let b = board("1r2k3/8/8/8/8/8/8/R3K3");
    assert!(can_castle(&b, Color::White, CastleSide::Queen));
}

#[test]
fn test_no_castling_out_of_check() {
    let b = board("4k3/8/8/4r3/8/8/8/R3K2R");
    assert!(!can_castle(&b, Color::White, CastleSide::King));
    assert!(!can_castle(&b, Color::White, CastleSide::Queen));
}

#[test]
fn test_no_castling_without_right() {
    let mut b = board("4k3/8/8/8/8/8/8/R3K2R");
    b.castling.revoke(Color::White, CastleSide::King);
    assert!(!can_castle(&b, Color::White, CastleSide::King));
    assert!(can_castle(&b, Color::White, CastleSide::Queen));
}

#[test]
fn test_pinned_rook_stays_on_file() {
    let b = board("k3r3/8/8/8/8/8/4R3/4K3");
    assert_eq!(
        legal_destinations(&b, sq("e2"), Color::White),
        vec![sq("e3"), sq("e4"), sq("e5"), sq("e6"), sq("e7"), sq("e8")]
    );
    // Pseudo-legal generation still sees the sideways moves
    assert_eq!(pseudo_moves_for_piece(&b, sq("e2")).len(), 13);
}

#[test]
fn test_legal_destinations_empty_cases() {
    let b = Board::startpos();
    assert!(legal_destinations(&b, sq("e4"), Color::White).is_empty());
    assert!(legal_destinations(&b, sq("e7"), Color::White).is_empty());
    assert!(legal_destinations(&b, sq("a1"), Color::White).is_empty());
    assert_eq!(
        legal_destinations(&b, sq("g1"), Color::White),
        vec![sq("h3"), sq("f3")]
    );
}

#[test]
fn test_legal_filter_leaves_board_unchanged() {
    let b = board("k3r3/8/8/8/8/8/4R3/4K3");
    let mut work = b.clone();
    let mut out = Vec::new();
    legal_moves_into(&mut work, Color::White, &mut out);
    assert_eq!(work, b);
    assert!(!out.is_empty());
}
