//! Legality oracle.
//!
//! Confirmed moves pass straight through. Castling is judged by its own
//! routine; every other move by applying it, testing the mover's king and
//! reversing it again.

use super::types::{king_home, CastleWing, Move, Square};
use super::Board;

impl Board {
    /// Returns true if `mv` is legal for the side to move.
    ///
    /// `mv` must be a move generated for the current position.
    pub fn is_legal(&mut self, mv: Move) -> bool {
        if mv.is_confirmed_legal() {
            return true;
        }
        if mv.is_castling() {
            return self.castling_is_legal(mv);
        }
        let side = self.side_to_move();
        self.make_move(mv);
        let legal = !self.is_in_check(side);
        self.reverse(mv);
        debug_assert_eq!(
            self.hash_history.last().copied(),
            Some(self.hash as u32),
            "trial of {mv:?} left the hash out of step"
        );
        legal
    }

    /// Castling needs the right, a clear path, a king not in check and no
    /// attacked square among those the king crosses or lands on.
    pub(crate) fn castling_is_legal(&self, mv: Move) -> bool {
        let side = self.side_to_move();
        let wing = CastleWing::of_king_target(mv.to());
        if mv.from() != king_home(side) || mv.to() != wing.king_target(side) {
            return false;
        }
        if !self.castle_path_clear(side, wing) || self.is_in_check(side) {
            return false;
        }
        let enemy = side.opponent();
        let rank = side.back_rank();
        wing.transit_files()
            .iter()
            .all(|&file| !self.is_square_attacked(Square::at(rank, file), enemy))
    }
}
