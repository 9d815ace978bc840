use chess_rules::board::{DrawReason, MoveError, START_FEN};
use chess_rules::{Color, Game, GameResult, Piece, Square};

fn play_all(game: &mut Game, moves: &[&str]) {
    for text in moves {
        game.play_uci(text)
            .unwrap_or_else(|e| panic!("{text} rejected: {e}"));
    }
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn scholars_mate_ends_the_game() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"]);

    assert!(game.is_in_check());
    assert!(game.legal_moves().is_empty());
    assert_eq!(
        game.result(),
        GameResult::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(game.result().to_string(), "checkmate, White wins");
    assert_eq!(game.play_uci("e8e7"), Err(MoveError::GameOver));
}

#[test]
fn stalemate_is_a_draw() {
    let mut game = Game::from_fen("7k/8/5K2/6Q1/8/8/8/8 w - - 0 1").unwrap();
    assert_eq!(game.result(), GameResult::Ongoing);
    play_all(&mut game, &["g5g6"]);

    assert!(!game.is_in_check());
    assert_eq!(game.result(), GameResult::Draw(DrawReason::Stalemate));
    assert!(game.result().is_over());
}

#[test]
fn undo_walks_back_to_the_start() {
    let mut game = Game::new();
    let moves = ["d2d4", "d7d5", "c2c4", "d5c4", "e2e4", "b7b5", "a2a4", "c7c6"];
    play_all(&mut game, &moves);
    assert_eq!(game.history().len(), moves.len());

    let mut undone = Vec::new();
    while let Some(mv) = game.undo().unwrap() {
        undone.push(mv.to_string());
    }
    undone.reverse();
    assert_eq!(undone, moves);
    assert_eq!(game.fen(), START_FEN);
    assert_eq!(game.legal_moves().len(), 20);
    assert_eq!(game.undo(), Ok(None));
}

#[test]
fn undo_reopens_a_finished_game() {
    let mut game = Game::new();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(game.result().is_over());

    let last = game.undo().unwrap().unwrap();
    assert_eq!(last.to_string(), "d8h4");
    assert_eq!(game.result(), GameResult::Ongoing);
    assert_eq!(game.side_to_move(), Color::Black);
    play_all(&mut game, &["g8f6"]);
}

#[test]
fn threefold_repetition_by_knight_shuffle() {
    let mut game = Game::new();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    play_all(&mut game, &shuffle);
    assert_eq!(game.result(), GameResult::Ongoing);
    play_all(&mut game, &shuffle);
    assert_eq!(game.result(), GameResult::Draw(DrawReason::ThreefoldRepetition));
    assert_eq!(game.play_uci("e2e4"), Err(MoveError::GameOver));

    game.undo().unwrap();
    assert_eq!(game.result(), GameResult::Ongoing);
}

#[test]
fn promotion_through_the_session() {
    let mut game = Game::from_fen("8/4P1k1/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(matches!(game.play(sq("e7"), sq("e8"), None), Err(MoveError::IllegalMove { .. })));
    let mv = game.play(sq("e7"), sq("e8"), Some(Piece::Knight)).unwrap();
    assert_eq!(mv.promotion(), Some(Piece::Knight));
    assert_eq!(game.fen(), "4N3/6k1/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(game.result(), GameResult::Draw(DrawReason::InsufficientMaterial));
}

#[test]
fn bad_input_is_reported() {
    let mut game = Game::new();
    assert!(matches!(game.play_uci("e2"), Err(MoveError::Parse(_))));
    assert!(matches!(game.play_uci("e2e5"), Err(MoveError::IllegalMove { .. })));
    assert!(Game::from_fen("not a fen").is_err());
    assert_eq!(game.fen(), START_FEN);
}

#[cfg(feature = "serde")]
#[test]
fn results_serialize() {
    let result = GameResult::Draw(DrawReason::FiftyMoveRule);
    let json = serde_json::to_string(&result).unwrap();
    let back: GameResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
