//! Check evasion and pin handling through the full move generator.

use crate::board::{Board, Color, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn moves_from(board: &mut Board, from: &str) -> Vec<String> {
    let mut moves: Vec<String> = board
        .legal_moves_from(sq(from))
        .iter()
        .map(ToString::to_string)
        .collect();
    moves.sort();
    moves
}

#[test]
fn test_pinned_pawn_may_capture_pinner() {
    let mut board = Board::from_fen("4k3/8/8/8/8/2b5/3P4/4K3 w - - 0 1");
    assert_eq!(moves_from(&mut board, "d2"), vec!["d2c3"]);
}

#[test]
fn test_pinned_queen_stays_on_diagonal() {
    let mut board = Board::from_fen("4k3/8/8/8/8/2b5/3Q4/4K3 w - - 0 1");
    assert_eq!(moves_from(&mut board, "d2"), vec!["d2c3"]);
}

#[test]
fn test_pinned_rook_slides_toward_pinner() {
    let mut board = Board::from_fen("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1");
    assert_eq!(
        moves_from(&mut board, "e2"),
        vec!["e2e3", "e2e4", "e2e5", "e2e6", "e2e7"]
    );
}

#[test]
fn test_pinned_pawn_pushes_along_file() {
    let mut board = Board::from_fen("4k3/4r3/8/8/8/8/4P3/4K3 w - - 0 1");
    assert_eq!(moves_from(&mut board, "e2"), vec!["e2e3", "e2e4"]);
}

#[test]
fn test_en_passant_discovering_rank_check_is_illegal() {
    let mut board = Board::from_fen("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 1");
    assert_eq!(moves_from(&mut board, "b5"), vec!["b5b6"]);
}

#[test]
fn test_en_passant_removes_checking_pawn() {
    let mut board = Board::from_fen("8/8/8/2k5/3Pp3/8/8/4K3 b - d3 0 1");
    let ctx = board.compute_check_context(Color::Black);
    assert_eq!(ctx.check_count, 1);
    assert!(board.parse_move("e4d3").unwrap().is_en_passant());
}

#[test]
fn test_single_check_evasions() {
    // King steps off the line; d1 and f1 stay covered by the rook behind the king
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
    let mut moves: Vec<String> = board.generate_moves().iter().map(ToString::to_string).collect();
    moves.sort();
    assert_eq!(moves, vec!["e1d2", "e1e2", "e1f2"]);
}

#[test]
fn test_single_check_block_or_capture() {
    let mut board = Board::from_fen("4k3/8/8/8/8/1N6/6B1/r3K3 w - - 0 1");
    let mut moves: Vec<String> = board.generate_moves().iter().map(ToString::to_string).collect();
    moves.sort();
    assert_eq!(moves, vec!["b3a1", "b3c1", "e1d2", "e1e2", "e1f2"]);
}

#[test]
fn test_pinned_piece_cannot_resolve_check() {
    // The d2 knight would block the rook but is pinned by the bishop
    let mut board = Board::from_fen("4k3/8/8/b7/8/8/3N4/r3K3 w - - 0 1");
    assert!(board.legal_moves_from(sq("d2")).is_empty());
}

#[test]
fn test_double_check_only_king_moves() {
    let mut board = Board::from_fen("4k3/8/8/8/8/3n4/3Q4/r3K3 w - - 0 1");
    let ctx = board.compute_check_context(Color::White);
    assert!(ctx.is_double_check());
    let moves = board.generate_moves();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.from() == sq("e1")));
}

#[test]
fn test_no_move_leaves_king_in_check() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    ];
    for fen in fens {
        let mut board = Board::from_fen(fen);
        for first in board.generate_moves() {
            board.make_move(first);
            let mover = board.side_to_move().opponent();
            assert!(!board.is_in_check(mover), "{fen}: {first} leaves the king attacked");
            for second in board.generate_moves() {
                board.make_move(second);
                let mover = board.side_to_move().opponent();
                assert!(!board.is_in_check(mover), "{fen}: {first} {second}");
                board.unmake_move(second).unwrap();
            }
            board.unmake_move(first).unwrap();
        }
    }
}
