use log::error;

use crate::zobrist::ZOBRIST;

use super::error::InvariantViolation;
use super::types::{CastleWing, Color, Move, Piece, PieceCode, Square};
use super::Board;

impl Board {
    /// Apply a move generated for the current position.
    ///
    /// Every effect is recorded in the per-ply histories so the move can be
    /// taken back exactly with [`Board::unmake_move`].
    pub fn make_move(&mut self, mv: Move) {
        let side = self.side_to_move();
        let enemy = side.opponent();
        let from = mv.from();
        let to = mv.to();
        let new_ply = self.ply + 1;

        // Drop the old en-passant key while the placement it depends on is intact
        self.hash ^= self.en_passant_key(self.en_passant_square(), side);

        let moving = self.take_piece(from);
        debug_assert_eq!(moving, mv.moving(), "{mv:?} does not match the board");
        let captured = if mv.is_en_passant() {
            self.take_piece(mv.en_passant_victim())
        } else {
            self.take_piece(to)
        };
        let placed = match mv.promotion() {
            Some(piece) => PieceCode::new(side, piece),
            None => moving,
        };
        self.put_piece(to, placed);

        if mv.is_castling() {
            let wing = CastleWing::of_king_target(to);
            let rook = self.take_piece(wing.rook_home(side));
            self.put_piece(wing.rook_target(side), rook);
        }

        match moving.piece() {
            Some(Piece::King) => {
                for wing in CastleWing::BOTH {
                    self.lose_castling_right(side, wing, new_ply);
                }
            }
            Some(Piece::Rook) => {
                for wing in CastleWing::BOTH {
                    if from == wing.rook_home(side) {
                        self.lose_castling_right(side, wing, new_ply);
                    }
                }
            }
            _ => {}
        }
        if captured.piece() == Some(Piece::Rook) {
            for wing in CastleWing::BOTH {
                if to == wing.rook_home(enemy) {
                    self.lose_castling_right(enemy, wing, new_ply);
                }
            }
        }

        self.ply = new_ply;
        self.hash ^= ZOBRIST.side_to_move_key;

        let is_pawn = moving.piece() == Some(Piece::Pawn);
        let en_passant = if is_pawn && from.rank().abs_diff(to.rank()) == 2 {
            Some(Square::at((from.rank() + to.rank()) / 2, from.file()))
        } else {
            None
        };
        self.hash ^= self.en_passant_key(en_passant, enemy);

        let clock = if is_pawn || !captured.is_empty() {
            0
        } else {
            self.halfmove_clock() + 1
        };
        self.ep_history.push(en_passant);
        self.clock_history.push(clock);
        self.hash_history.push(self.hash as u32);
    }

    /// Take back the most recently applied move and verify the restored
    /// position against its recorded hash.
    ///
    /// A mismatch means the board no longer matches its own history and must
    /// not be used further.
    pub fn unmake_move(&mut self, mv: Move) -> Result<(), InvariantViolation> {
        if self.plies_played() == 0 {
            error!("unmake of {mv} requested with no move to take back");
            return Err(InvariantViolation {
                ply: self.ply,
                expected_hash: self.hash as u32,
                actual_hash: self.hash as u32,
            });
        }
        self.reverse(mv);
        let expected = self.hash_history.last().copied().unwrap_or_default();
        let actual = self.hash as u32;
        if expected != actual {
            error!(
                "hash mismatch after taking back {mv}: expected {expected:#010x}, found {actual:#010x}"
            );
            return Err(InvariantViolation {
                ply: self.ply,
                expected_hash: expected,
                actual_hash: actual,
            });
        }
        Ok(())
    }

    /// Exact inverse of [`Board::make_move`] for the move applied last
    pub(crate) fn reverse(&mut self, mv: Move) {
        let undone_ply = self.ply;
        let mover = self.side_to_move().opponent();
        let from = mv.from();
        let to = mv.to();

        self.hash ^= self.en_passant_key(self.en_passant_square(), mover.opponent());
        self.ep_history.pop();
        self.clock_history.pop();
        self.hash_history.pop();

        self.hash ^= ZOBRIST.side_to_move_key;
        for color in Color::BOTH {
            for wing in CastleWing::BOTH {
                if self.castle_lost[color.index()][wing.index()] == Some(undone_ply) {
                    self.castle_lost[color.index()][wing.index()] = None;
                    self.hash ^= ZOBRIST.castling(color, wing);
                }
            }
        }
        self.ply = undone_ply - 1;

        if mv.is_castling() {
            let wing = CastleWing::of_king_target(to);
            let rook = self.take_piece(wing.rook_target(mover));
            self.put_piece(wing.rook_home(mover), rook);
        }

        self.take_piece(to);
        self.put_piece(from, mv.moving());
        if mv.is_capture() {
            let victim_square = if mv.is_en_passant() {
                mv.en_passant_victim()
            } else {
                to
            };
            self.put_piece(victim_square, mv.captured());
        }

        self.hash ^= self.en_passant_key(self.en_passant_square(), mover);
    }

    fn lose_castling_right(&mut self, color: Color, wing: CastleWing, ply: u32) {
        let slot = &mut self.castle_lost[color.index()][wing.index()];
        if slot.is_none() {
            *slot = Some(ply);
            self.hash ^= ZOBRIST.castling(color, wing);
        }
    }
}
