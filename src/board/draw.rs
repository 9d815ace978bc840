//! Draw detection and terminal classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Bitboard, Color, Piece, Square};
use super::Board;

/// Why a game ended drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

/// State of the game from the side to move's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    Ongoing,
    Draw(DrawReason),
    Checkmate { winner: Color },
}

impl GameResult {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::ThreefoldRepetition => "threefold repetition",
            DrawReason::InsufficientMaterial => "insufficient material",
        };
        f.write_str(text)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Ongoing => write!(f, "game in progress"),
            GameResult::Draw(reason) => write!(f, "draw by {reason}"),
            GameResult::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
        }
    }
}

impl Board {
    /// A hundred plies without a pawn move or capture
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock() >= 100
    }

    /// Neither side can possibly mate: no pawns, rooks or queens, and either
    /// at most one minor piece or only bishops all on one square color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let count = |piece: Piece| -> u32 {
            Color::BOTH
                .iter()
                .map(|&color| u32::from(self.piece_count(color, piece)))
                .sum()
        };
        if count(Piece::Pawn) + count(Piece::Rook) + count(Piece::Queen) > 0 {
            return false;
        }

        let knights = count(Piece::Knight);
        let bishops = count(Piece::Bishop);
        if knights + bishops <= 1 {
            return true;
        }
        if knights > 0 {
            return false;
        }

        let mut squares = Bitboard::EMPTY;
        for idx in 0..64 {
            let sq = Square::from_index_unchecked(idx);
            if matches!(self.piece_at(sq), Some((_, Piece::Bishop))) {
                squares.insert(sq);
            }
        }
        (squares & Bitboard::LIGHT_SQUARES).is_empty() || (squares & Bitboard::DARK_SQUARES).is_empty()
    }

    /// The current position occurred at least twice before with the same
    /// side to move. Only positions since the last irreversible move are
    /// compared.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        let Some((&current, earlier)) = self.hash_history.split_last() else {
            return false;
        };
        let window = (self.halfmove_clock() as usize).min(earlier.len());
        let matches = earlier
            .iter()
            .rev()
            .take(window)
            .skip(1)
            .step_by(2)
            .filter(|&&hash| hash == current)
            .count();
        matches >= 2
    }

    /// Any of the automatic draw rules applies
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_insufficient_material() || self.is_threefold_repetition()
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move()) && !self.has_legal_move()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move()) && !self.has_legal_move()
    }

    /// Classify the position. A side without legal moves is mated or
    /// stalemated before any other draw rule is consulted.
    pub fn result(&mut self) -> GameResult {
        let has_move = self.has_legal_move();
        self.classify(has_move)
    }

    /// Classification given whether the side to move has a legal move
    pub(crate) fn classify(&self, has_legal_move: bool) -> GameResult {
        let side = self.side_to_move();
        if !has_legal_move {
            return if self.is_in_check(side) {
                GameResult::Checkmate {
                    winner: side.opponent(),
                }
            } else {
                GameResult::Draw(DrawReason::Stalemate)
            };
        }
        if self.is_fifty_move_draw() {
            GameResult::Draw(DrawReason::FiftyMoveRule)
        } else if self.is_insufficient_material() {
            GameResult::Draw(DrawReason::InsufficientMaterial)
        } else if self.is_threefold_repetition() {
            GameResult::Draw(DrawReason::ThreefoldRepetition)
        } else {
            GameResult::Ongoing
        }
    }
}
