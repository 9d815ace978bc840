use super::super::geometry::king_steps;
use super::super::types::{king_home, CastleWing, Color, Move, MoveList, Piece, PieceCode, Square};
use super::super::Board;

impl Board {
    /// King steps to squares that stay unattacked once the king has left its
    /// current square. Such steps need no further proof.
    pub(crate) fn generate_king_moves(&self, side: Color, moves: &mut MoveList) {
        let from = self.king_square(side);
        let king = PieceCode::new(side, Piece::King);
        let enemy = side.opponent();
        for &to in king_steps(from) {
            let occupant = self.code_at(to);
            if occupant.is_color(side) {
                continue;
            }
            if !self.is_attacked_with_vacated(to, enemy, Some(from)) {
                moves.push(Move::new(from, to, king, occupant).confirmed());
            }
        }
    }

    /// Castling candidates: right intact and the squares between king and
    /// rook empty. Attacks on the king's path are left to the oracle.
    pub(crate) fn generate_castling_moves(&self, side: Color, moves: &mut MoveList) {
        let from = king_home(side);
        let king = PieceCode::new(side, Piece::King);
        if self.code_at(from) != king {
            return;
        }
        for wing in CastleWing::BOTH {
            if self.castle_path_clear(side, wing) {
                moves.push(Move::new(from, wing.king_target(side), king, PieceCode::EMPTY).as_castle());
            }
        }
    }

    /// Right not lost, rook at home and every square between king and rook empty
    pub(crate) fn castle_path_clear(&self, side: Color, wing: CastleWing) -> bool {
        let rank = side.back_rank();
        self.has_castling_right(side, wing)
            && self.code_at(wing.rook_home(side)) == PieceCode::new(side, Piece::Rook)
            && wing
                .empty_files()
                .iter()
                .all(|&file| self.code_at(Square::at(rank, file)).is_empty())
    }
}
