//! Zobrist keys for position hashing.
//!
//! Keys come from a fixed-seed generator so hashes are stable across runs.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastleWing, Color, PieceCode, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][kind][square]
    piece_keys: [[[u64; 64]; 6]; 2],
    pub(crate) side_to_move_key: u64,
    // castling_keys[color][wing]: 0=White, 1=Black; 0=King side, 1=Queen side
    castling_keys: [[u64; 2]; 2],
    // en_passant_keys[file]
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 6]; 2];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let side_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            side_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    /// Key of `code` standing on `sq`; zero for an empty square
    #[inline]
    pub(crate) fn piece(&self, code: PieceCode, sq: Square) -> u64 {
        match code.split() {
            Some((color, piece)) => self.piece_keys[color.index()][piece.index()][sq.index()],
            None => 0,
        }
    }

    #[inline]
    pub(crate) fn castling(&self, color: Color, wing: CastleWing) -> u64 {
        self.castling_keys[color.index()][wing.index()]
    }

    #[inline]
    pub(crate) fn en_passant(&self, file: u8) -> u64 {
        self.en_passant_keys[file as usize]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
