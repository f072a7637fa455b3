//! Random legal games checked against the engine's invariants.
//!
//! Each seed plays a reproducible game; seeds run in parallel.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use chess_rules::{
    Board, Color, Game, GameStatus, PieceKind, Promotion, king_in_check, legal_moves,
    pseudo_moves,
};

const SEEDS: u64 = 48;
const MAX_PLIES: usize = 160;

fn king_count(board: &Board, color: Color) -> usize {
    board
        .pieces()
        .filter(|(_, pc)| pc.color == color && pc.kind == PieceKind::King)
        .count()
}

fn assert_reversible(board: &Board, color: Color) {
    for mv in pseudo_moves(board, color) {
        let mut work = board.clone();
        let overwritten = work.apply_transient(mv, color);
        work.reverse_transient(mv, color, overwritten);
        assert_eq!(&work, board, "{mv} did not reverse");
    }
}

fn play_random_game(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();

    for _ in 0..MAX_PLIES {
        let mover = game.turn();
        let moves = game.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            panic!("seed {seed}: no legal moves but game still running");
        };
        assert_reversible(game.board(), mover);

        let promotions = [
            Promotion::Queen,
            Promotion::Rook,
            Promotion::Bishop,
            Promotion::Knight,
        ];
        let mut chooser = |_: Color| promotions[rng.gen_range(0..promotions.len())];
        let status = game
            .play(&mv.to_string(), &mut chooser)
            .unwrap_or_else(|e| panic!("seed {seed}: generated move {mv} refused: {e}"));

        let board = game.board();
        assert_eq!(king_count(board, Color::White), 1, "seed {seed}");
        assert_eq!(king_count(board, Color::Black), 1, "seed {seed}");
        assert!(
            !king_in_check(board, mover),
            "seed {seed}: {mv} left the mover in check"
        );

        for color in [Color::White, Color::Black] {
            let value: u32 = game.captured(color).iter().map(|k| k.value()).sum();
            assert_eq!(game.score(color), value, "seed {seed}");
        }

        if status != GameStatus::Continue {
            assert!(legal_moves(board, mover.other()).is_empty(), "seed {seed}");
            assert_eq!(
                status.winner(),
                king_in_check(board, mover.other()).then_some(mover),
                "seed {seed}"
            );
            return;
        }
        assert_eq!(game.turn(), mover.other());
    }
}

#[test]
fn random_games_keep_invariants() {
    (0..SEEDS).into_par_iter().for_each(play_random_game);
}
