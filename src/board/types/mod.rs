//! Core chess types.
//!
//! - `Piece`, `Color` and the packed `PieceCode` stored on each square
//! - `Square` - board index 0..64
//! - `Bitboard` - square sets used for check masks and pin rays
//! - `Move` and `MoveList`
//! - `CastleWing`

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastleWing;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceCode};
pub use square::Square;

pub(crate) use castling::king_home;
pub(crate) use piece::PROMOTION_PIECES;
