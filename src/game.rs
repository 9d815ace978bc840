//! A game session: one board, the moves played on it and the legal replies.
//!
//! # Example
//! ```
//! use chess_rules::game::Game;
//! use chess_rules::board::GameResult;
//!
//! let mut game = Game::new();
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.play_uci(mv).unwrap();
//! }
//! assert!(matches!(game.result(), GameResult::Checkmate { .. }));
//! ```

use log::{debug, error, trace};

use crate::board::{
    parse_coordinates, Board, Color, FenError, GameResult, InvariantViolation, Move, MoveError, MoveList, Piece,
    Square,
};

/// Owns the authoritative board and keeps the legal moves of the side to
/// move up to date after every change.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    legal: MoveList,
    played: Vec<Move>,
    poisoned: Option<InvariantViolation>,
}

impl Game {
    /// Game from the standard starting position
    #[must_use]
    pub fn new() -> Self {
        Game::with_board(Board::new())
    }

    /// Game from a position in FEN
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Game::with_board(Board::try_from_fen(fen)?))
    }

    fn with_board(mut board: Board) -> Self {
        let legal = board.generate_moves();
        Game {
            board,
            legal,
            played: Vec::new(),
            poisoned: None,
        }
    }

    /// Legal moves for the side to move
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        self.legal.as_slice()
    }

    /// Play the legal move matching `from`, `to` and `promotion`
    pub fn play(&mut self, from: Square, to: Square, promotion: Option<Piece>) -> Result<Move, MoveError> {
        if self.poisoned.is_some() {
            return Err(MoveError::SessionPoisoned);
        }
        if self.result().is_over() {
            return Err(MoveError::GameOver);
        }
        let mv = self.legal.find(from, to, promotion).ok_or_else(|| {
            let mut notation = format!("{from}{to}");
            if let Some(piece) = promotion {
                notation.push(piece.to_char());
            }
            MoveError::IllegalMove { notation }
        })?;

        self.board.make_move(mv);
        self.played.push(mv);
        self.legal = self.board.generate_moves();
        trace!("played {mv}, now {}", self.board.to_fen());

        let result = self.result();
        if result.is_over() {
            debug!("game over after {mv}: {result}");
        }
        Ok(mv)
    }

    /// Play a move given in long algebraic notation ("e2e4", "e7e8q")
    pub fn play_uci(&mut self, text: &str) -> Result<Move, MoveError> {
        let (from, to, promotion) = parse_coordinates(text)?;
        self.play(from, to, promotion)
    }

    /// Take back the last move. `Ok(None)` when nothing has been played.
    ///
    /// An error means the board failed its own consistency check; the
    /// session refuses all further moves afterwards.
    pub fn undo(&mut self) -> Result<Option<Move>, InvariantViolation> {
        if let Some(violation) = &self.poisoned {
            return Err(violation.clone());
        }
        let Some(mv) = self.played.pop() else {
            return Ok(None);
        };
        if let Err(violation) = self.board.unmake_move(mv) {
            error!("session stopped: {violation}");
            self.poisoned = Some(violation.clone());
            return Err(violation);
        }
        self.legal = self.board.generate_moves();
        trace!("took back {mv}, now {}", self.board.to_fen());
        Ok(Some(mv))
    }

    /// Classify the current position
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.board.classify(!self.legal.is_empty())
    }

    /// Current position in FEN
    #[must_use]
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.board.side_to_move())
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.played.last().copied()
    }

    /// Moves played since the session started, oldest first
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.played
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True once a failed consistency check has stopped the session
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
