use super::super::geometry::{ray, Direction, DIAGONAL, STRAIGHT};
use super::super::types::{Bitboard, Move, MoveList, PieceCode, Square};
use super::super::Board;

impl Board {
    /// Rook, bishop and queen moves: each ray runs to the first occupied
    /// square, which is included when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(&self, from: Square, slider: PieceCode, targets: Bitboard, moves: &mut MoveList) {
        let Some((side, piece)) = slider.split() else {
            return;
        };
        let straight: &[Direction] = if piece.attacks_straight() { &STRAIGHT[..] } else { &[] };
        let diagonal: &[Direction] = if piece.attacks_diagonally() { &DIAGONAL[..] } else { &[] };

        for &dir in straight.iter().chain(diagonal) {
            for to in ray(from, dir) {
                let occupant = self.code_at(to);
                if occupant.is_color(side) {
                    break;
                }
                if targets.contains(to) {
                    moves.push(Move::new(from, to, slider, occupant).confirmed());
                }
                if !occupant.is_empty() {
                    break;
                }
            }
        }
    }
}
