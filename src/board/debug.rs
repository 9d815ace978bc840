use std::fmt;

use super::types::{Color, Piece, PieceCode, Square};
use super::Board;

impl Board {
    /// Check every cached quantity against a recount of the squares.
    ///
    /// Returns a description of the first inconsistency found.
    pub fn validate(&self) -> Result<(), String> {
        let mut census = [0u8; 16];
        let mut totals = [0u8; 2];
        for idx in 0..64 {
            let sq = Square::from_index_unchecked(idx);
            let code = self.code_at(sq);
            if let Some((color, piece)) = code.split() {
                census[code.bits() as usize] += 1;
                totals[color.index()] += 1;
                if piece == Piece::King && self.king_square(color) != sq {
                    return Err(format!(
                        "{color} king on {sq} but king square says {}",
                        self.king_square(color)
                    ));
                }
            }
        }
        for color in Color::BOTH {
            let kings = census[PieceCode::new(color, Piece::King).bits() as usize];
            if kings != 1 {
                return Err(format!("{color} has {kings} kings"));
            }
        }
        if census != self.piece_count {
            return Err(format!("piece census {:?} != cached {:?}", census, self.piece_count));
        }
        if totals != self.total_count {
            return Err(format!("totals {:?} != cached {:?}", totals, self.total_count));
        }
        let expected = self.calculate_hash();
        if expected != self.hash {
            return Err(format!(
                "incremental hash {:#018x} != recomputed {:#018x}",
                self.hash, expected
            ));
        }
        let depth = self.plies_played() + 1;
        for (name, len) in [
            ("en passant", self.ep_history.len()),
            ("halfmove clock", self.clock_history.len()),
            ("hash", self.hash_history.len()),
        ] {
            if len != depth {
                return Err(format!("{name} history holds {len} entries, expected {depth}"));
            }
        }
        if self.hash_history.last().copied() != Some(self.hash as u32) {
            return Err("hash history does not end with the current hash".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = match self.piece_at(Square::at(rank, file)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => ' ',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.side_to_move())
    }
}
