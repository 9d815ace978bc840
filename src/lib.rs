//! Chess rules engine: position codec, legal move generation, reversible
//! move application and game-end detection.

pub mod board;
pub mod game;
pub mod perft;
mod zobrist;

pub use board::{Board, Color, GameResult, Move, Piece, Square};
pub use game::Game;
