//! Make/unmake move tests.

use crate::board::{Board, CastleWing, Color, Piece, Square};

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
];

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_every_move_unmakes_exactly() {
    for fen in POSITIONS {
        let mut board = Board::from_fen(fen);
        let original = board.clone();
        for mv in board.generate_moves() {
            board.make_move(mv);
            board.validate().unwrap_or_else(|e| panic!("{fen} after {mv}: {e}"));
            board.unmake_move(mv).unwrap();
            assert_eq!(board, original, "{fen}: {mv} did not unmake cleanly");
        }
    }
}

#[test]
fn test_two_ply_unmake() {
    for fen in POSITIONS {
        let mut board = Board::from_fen(fen);
        let original = board.clone();
        for first in board.generate_moves() {
            board.make_move(first);
            let after_first = board.clone();
            for second in board.generate_moves() {
                board.make_move(second);
                board.unmake_move(second).unwrap();
                assert_eq!(board, after_first);
            }
            board.unmake_move(first).unwrap();
        }
        assert_eq!(board, original);
    }
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board = Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original = board.clone();
    let mv = board.parse_move("e5f6").unwrap();
    assert!(mv.is_en_passant());

    board.make_move(mv);
    assert_eq!(board.piece_at(sq("f5")), None);
    assert_eq!(board.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.piece_count(Color::Black, Piece::Pawn), 7);
    assert_eq!(board.en_passant_square(), None);

    board.unmake_move(mv).unwrap();
    assert_eq!(board, original);
    assert_eq!(board.en_passant_square(), Some(sq("f6")));
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K6k w - - 0 1");
    let original = board.clone();
    for promo in ["a7a8q", "a7a8r", "a7a8b", "a7a8n"] {
        let mv = board.parse_move(promo).unwrap();
        board.make_move(mv);
        let piece = mv.promotion().unwrap();
        assert_eq!(board.piece_at(sq("a8")), Some((Color::White, piece)));
        assert_eq!(board.piece_count(Color::White, Piece::Pawn), 0);
        assert_eq!(board.piece_count(Color::White, piece), 1);
        board.unmake_move(mv).unwrap();
        assert_eq!(board, original);
    }
}

#[test]
fn test_castling_make_unmake_restores_rights() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let original = board.clone();

    let mv = board.parse_move("e1c1").unwrap();
    assert!(mv.is_castling());
    board.make_move(mv);
    assert_eq!(board.piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(sq("a1")), None);
    assert!(!board.has_castling_right(Color::White, CastleWing::King));
    assert!(!board.has_castling_right(Color::White, CastleWing::Queen));
    assert!(board.has_castling_right(Color::Black, CastleWing::King));

    board.unmake_move(mv).unwrap();
    assert_eq!(board, original);
    assert!(board.has_castling_right(Color::White, CastleWing::Queen));
}

#[test]
fn test_right_lost_earlier_survives_later_unmake() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let rook_move = board.make_move_uci("h1h2").unwrap();
    let reply = board.make_move_uci("a8a7").unwrap();
    let back = board.make_move_uci("h2h1").unwrap();
    assert!(!board.has_castling_right(Color::White, CastleWing::King));

    board.unmake_move(back).unwrap();
    assert!(!board.has_castling_right(Color::Black, CastleWing::Queen));
    board.unmake_move(reply).unwrap();
    assert!(!board.has_castling_right(Color::White, CastleWing::King));
    assert!(board.has_castling_right(Color::Black, CastleWing::Queen));

    board.unmake_move(rook_move).unwrap();
    assert!(board.has_castling_right(Color::White, CastleWing::King));
    assert_eq!(board, Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"));
}

#[test]
fn test_rights_absent_at_load_never_return() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kk - 0 1");
    let mv = board.make_move_uci("a1a2").unwrap();
    board.unmake_move(mv).unwrap();
    assert!(!board.has_castling_right(Color::White, CastleWing::Queen));
    assert!(board.has_castling_right(Color::White, CastleWing::King));
}

#[test]
fn test_double_push_records_target() {
    let mut board = Board::new();
    let mv = board.make_move_uci("e2e4").unwrap();
    assert_eq!(board.en_passant_square(), Some(sq("e3")));
    let reply = board.make_move_uci("g8f6").unwrap();
    assert_eq!(board.en_passant_square(), None);

    board.unmake_move(reply).unwrap();
    assert_eq!(board.en_passant_square(), Some(sq("e3")));
    board.unmake_move(mv).unwrap();
    assert_eq!(board.en_passant_square(), None);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::from_fen(POSITIONS[1]);
    let before: Vec<String> = board.generate_moves().iter().map(ToString::to_string).collect();
    for mv in board.generate_moves() {
        board.make_move(mv);
        board.unmake_move(mv).unwrap();
    }
    let after: Vec<String> = board.generate_moves().iter().map(ToString::to_string).collect();
    assert_eq!(before, after);
}

#[test]
fn test_counters_follow_plies() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R b K - 7 12");
    assert_eq!(board.ply(), 23);
    let mv = board.make_move_uci("e8d8").unwrap();
    assert_eq!(board.fullmove_number(), 13);
    assert_eq!(board.halfmove_clock(), 8);
    assert_eq!(board.side_to_move(), Color::White);
    board.unmake_move(mv).unwrap();
    assert_eq!(board.fullmove_number(), 12);
    assert_eq!(board.halfmove_clock(), 7);
}
