//! Property-based tests using proptest.

use crate::board::{Board, Move};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `count` random legal moves, stopping early at a terminal position
fn random_playout(board: &mut Board, rng: &mut StdRng, count: usize) -> Vec<Move> {
    let mut played = Vec::new();
    for _ in 0..count {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(mv);
        played.push(mv);
    }
    played
}

proptest! {
    /// Property: unmaking every move in reverse order restores the board exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = board.clone();

        let mut played = random_playout(&mut board, &mut rng, num_moves);
        while let Some(mv) = played.pop() {
            prop_assert!(board.unmake_move(mv).is_ok());
        }

        prop_assert_eq!(board, initial);
    }

    /// Property: the incremental hash, census and histories stay consistent
    #[test]
    fn prop_board_stays_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if random_playout(&mut board, &mut rng, 1).is_empty() {
                break;
            }
            if let Err(problem) = board.validate() {
                prop_assert!(false, "{} at {}", problem, board.to_fen());
            }
        }
    }

    /// Property: FEN round-trip preserves position and hash
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);

        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(board.hash(), restored.hash());
        prop_assert_eq!(board.side_to_move(), restored.side_to_move());
        prop_assert_eq!(board.en_passant_square(), restored.en_passant_square());
    }

    /// Property: legal moves are always legal (no self-check)
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..20usize) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let mover = board.side_to_move();
        for mv in board.generate_moves() {
            board.make_move(mv);
            prop_assert!(!board.is_in_check(mover), "Legal move left king in check: {:?}", mv);
            prop_assert!(board.unmake_move(mv).is_ok());
        }
    }

    /// Property: the short-circuit legal move probe agrees with full generation
    #[test]
    fn prop_has_legal_move_matches_generation(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let any = board.has_legal_move();
        prop_assert_eq!(any, !board.generate_moves().is_empty());
    }

    /// Property: every candidate the oracle accepts is among the generated legal moves
    #[test]
    fn prop_candidates_filter_to_legal_moves(seed in seed_strategy(), num_moves in 0..20usize) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let legal = board.generate_moves();
        let candidates = board.generate_candidates();
        let accepted = candidates.iter().filter(|&&mv| board.is_legal(mv)).count();
        prop_assert_eq!(accepted, legal.len());
    }
}
