use super::*;
use chess_rules::{Board, Promotion};

fn plain() -> ConsoleConfig {
    ConsoleConfig {
        color: false,
        ..ConsoleConfig::default()
    }
}

fn lines(view: &BoardView<'_>) -> Vec<String> {
    view.to_string()
        .lines()
        .map(|l| l.trim_end().to_string())
        .collect()
}

#[test]
fn test_startpos_layout() {
    let game = Game::new();
    let cfg = plain();
    let out = lines(&BoardView::new(&game, &cfg));

    assert_eq!(out[0], "Black");
    assert_eq!(out[1], " (0)");
    assert_eq!(out[3], "  ( a b c d e f g h )");
    assert_eq!(out[4], "(8) r n b q k b n r");
    assert_eq!(out[8], "(4) . . . . . . . .");
    assert_eq!(out[11], "(1) R N B Q K B N R");
    assert_eq!(out[13], "White");
    assert_eq!(out.last().unwrap(), "White's turn.");
}

#[test]
fn test_flipped_for_black() {
    let mut game = Game::new();
    game.play("e2e4", &mut |_: Color| Promotion::Queen).unwrap();
    let cfg = ConsoleConfig {
        flip_board: true,
        ..plain()
    };
    let out = lines(&BoardView::new(&game, &cfg));

    assert_eq!(out[0], "White");
    assert_eq!(out[3], "  ( h g f e d c b a )");
    assert_eq!(out[4], "(1) R N B K Q B N R");
    assert_eq!(out[7], "(4) . . . P . . . .");
    assert_eq!(out.last().unwrap(), "Black's turn.");
}

#[test]
fn test_highlights_without_color() {
    let mut game = Game::new();
    game.highlight_moves_from("b1".parse().unwrap());
    let cfg = plain();
    let out = lines(&BoardView::new(&game, &cfg));

    assert_eq!(out[9], "(3) * . * . . . . .");
}

#[test]
fn test_captures_listed_with_score() {
    let board = Board::from_diagram("4k3/8/8/3q4/4P3/8/8/4K3").unwrap();
    let mut game = Game::from_board(board, Color::White);
    game.play("e4d5", &mut |_: Color| Promotion::Queen).unwrap();
    let cfg = plain();
    let out = lines(&BoardView::new(&game, &cfg));

    assert_eq!(out[13], "White");
    assert_eq!(out[14], "q (9)");
}
