//! Chess board representation and rules.
//!
//! A mailbox board with incremental hashing, legal move generation driven by
//! a check/pin scan, exact move reversal and draw detection.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod debug;
mod draw;
mod error;
mod fen;
mod geometry;
mod legality;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attacks::CheckContext;
pub use draw::{DrawReason, GameResult};
pub use error::{FenError, InvariantViolation, MoveError, MoveParseError, SquareError};
pub use fen::{parse_coordinates, START_FEN};
pub use state::Board;
pub use types::{Bitboard, BitboardIter, CastleWing, Color, Move, MoveList, MoveListIntoIter, Piece, PieceCode, Square};
