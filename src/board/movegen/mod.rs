//! Legal move generation.
//!
//! Candidates are generated under one of three regimes picked from the check
//! context: double check (king steps only), single check (king steps plus
//! captures of and interpositions against the checker), or no check. Pins
//! narrow each piece's targets to its pin ray. Whatever the check/pin
//! reasoning settles is marked confirmed; the rest (en passant, castling) is
//! decided by the legality oracle.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::CheckContext;
use super::types::{Bitboard, MoveList, Piece, Square};
use super::Board;

impl Board {
    /// Candidate moves for the side to move, before the oracle pass
    pub(crate) fn generate_candidates(&self) -> MoveList {
        let side = self.side_to_move();
        let check = self.compute_check_context(side);
        let mut moves = MoveList::new();

        self.generate_king_moves(side, &mut moves);
        if check.is_double_check() {
            return moves;
        }

        let reach = if check.in_check() {
            check.checking_squares
        } else {
            Bitboard::ALL
        };

        for idx in 0..64 {
            let from = Square::from_index_unchecked(idx);
            let code = self.code_at(from);
            if !code.is_color(side) {
                continue;
            }
            let Some(targets) = piece_targets(&check, from, reach) else {
                continue;
            };
            match code.piece() {
                Some(Piece::Pawn) => self.generate_pawn_moves(from, side, targets, &mut moves),
                Some(Piece::Knight) => self.generate_knight_moves(from, side, targets, &mut moves),
                Some(Piece::Bishop | Piece::Rook | Piece::Queen) => {
                    self.generate_slider_moves(from, code, targets, &mut moves)
                }
                Some(Piece::King) | None => {}
            }
        }

        self.generate_en_passant(side, &mut moves);
        if !check.in_check() {
            self.generate_castling_moves(side, &mut moves);
        }
        moves
    }

    /// Generate all legal moves for the side to move
    pub fn generate_moves(&mut self) -> MoveList {
        let mut moves = self.generate_candidates();
        moves.retain(|mv| self.is_legal(mv));
        moves
    }

    /// Legal moves of the side to move starting on `from`
    pub fn legal_moves_from(&mut self, from: Square) -> MoveList {
        let mut moves = self.generate_moves();
        moves.retain(|mv| mv.from() == from);
        moves
    }

    /// True when the side to move has at least one legal move
    pub fn has_legal_move(&mut self) -> bool {
        let candidates = self.generate_candidates();
        candidates.iter().any(|&mv| self.is_legal(mv))
    }
}

/// Squares a non-king piece on `from` may move to, `None` when a pinned
/// piece cannot help against a check
fn piece_targets(check: &CheckContext, from: Square, reach: Bitboard) -> Option<Bitboard> {
    if check.in_check() && check.pinned.contains(from) {
        return None;
    }
    Some(reach & check.pin_ray(from))
}
