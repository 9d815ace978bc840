use super::super::geometry::pawn_capture_targets;
use super::super::types::{Bitboard, Color, Move, MoveList, Piece, PieceCode, Square, PROMOTION_PIECES};
use super::super::Board;

impl Board {
    /// Pushes and ordinary captures of the pawn on `from`, limited to `targets`.
    /// En passant is generated separately.
    pub(crate) fn generate_pawn_moves(&self, from: Square, side: Color, targets: Bitboard, moves: &mut MoveList) {
        if from.rank() == side.promotion_rank() {
            return;
        }
        let pawn = PieceCode::new(side, Piece::Pawn);
        let step = side.pawn_step();
        let one = from.offset(step);

        if self.code_at(one).is_empty() {
            if targets.contains(one) {
                push_pawn_move(moves, Move::new(from, one, pawn, PieceCode::EMPTY), side);
            }
            if from.rank() == side.pawn_start_rank() {
                let two = one.offset(step);
                if self.code_at(two).is_empty() && targets.contains(two) {
                    moves.push(Move::new(from, two, pawn, PieceCode::EMPTY).confirmed());
                }
            }
        }

        for to in pawn_capture_targets(from, step) {
            let victim = self.code_at(to);
            if victim.is_color(side.opponent()) && targets.contains(to) {
                push_pawn_move(moves, Move::new(from, to, pawn, victim), side);
            }
        }
    }

    /// En-passant captures onto the current target square. These always go
    /// through the oracle since removing two pawns from one rank can expose
    /// the king.
    pub(crate) fn generate_en_passant(&self, side: Color, moves: &mut MoveList) {
        let Some(target) = self.en_passant_square() else {
            return;
        };
        let pawn = PieceCode::new(side, Piece::Pawn);
        let victim = PieceCode::new(side.opponent(), Piece::Pawn);
        if self.code_at(target.offset(-side.pawn_step())) != victim {
            return;
        }
        // Own pawns that could capture onto `target` stand where an enemy pawn there would attack
        for from in pawn_capture_targets(target, -side.pawn_step()) {
            if self.code_at(from) == pawn {
                moves.push(Move::new(from, target, pawn, victim).as_en_passant());
            }
        }
    }
}

/// Push a pawn move, expanding it into the four promotion choices on the last rank
fn push_pawn_move(moves: &mut MoveList, mv: Move, side: Color) {
    if mv.to().rank() == side.promotion_rank() {
        for piece in PROMOTION_PIECES {
            moves.push(mv.with_promotion(piece).confirmed());
        }
    } else {
        moves.push(mv.confirmed());
    }
}
