//! Error types for board operations.

use std::fmt;

use super::types::Color;

/// Error type for position notation (FEN) parsing failures.
///
/// Every variant names the field it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// A mandatory field is absent
    MissingField { field: &'static str },
    /// Unrecognized character in the piece placement field
    InvalidPiece { char: char },
    /// A rank's pieces and gaps do not add up to 8 squares
    BadRankLength { rank: usize, squares: usize },
    /// Placement does not describe exactly 8 ranks
    BadRankCount { found: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// En-passant square malformed or on a rank no double push produces
    InvalidEnPassant { found: String },
    /// Halfmove clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a non-negative integer
    InvalidFullmoveNumber { found: String },
    /// A side does not have exactly one king
    KingCount { color: Color, found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingField { field } => {
                write!(f, "FEN is missing the {field} field")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN placement")
            }
            FenError::BadRankLength { rank, squares } => {
                write!(f, "FEN rank {rank} describes {squares} squares, expected 8")
            }
            FenError::BadRankCount { found } => {
                write!(f, "FEN placement has {found} ranks, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}'")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index outside 0..64
    IndexOutOfRange { index: usize },
    /// Not a file letter a-h followed by a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfRange { index } => {
                write!(f, "Square index {index} out of range (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for long algebraic move text ("e2e4", "e7e8q")
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for applying a move requested by coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move text could not be parsed
    Parse(MoveParseError),
    /// No legal move matches the request
    IllegalMove { notation: String },
    /// The game already ended
    GameOver,
    /// An earlier invariant violation made the session unusable
    SessionPoisoned,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Parse(err) => write!(f, "{err}"),
            MoveError::IllegalMove { notation } => write!(f, "Illegal move '{notation}'"),
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::SessionPoisoned => {
                write!(f, "Session stopped after an internal invariant violation")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveParseError> for MoveError {
    fn from(err: MoveParseError) -> Self {
        MoveError::Parse(err)
    }
}

/// A reversal found the board out of step with its own history.
///
/// This is a defect, not bad input. The board must not be used afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    pub ply: u32,
    pub expected_hash: u32,
    pub actual_hash: u32,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position hash mismatch after reversing to ply {}: expected {:#010x}, found {:#010x}",
            self.ply, self.expected_hash, self.actual_hash
        )
    }
}

impl std::error::Error for InvariantViolation {}
