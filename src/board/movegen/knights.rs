use super::super::geometry::knight_jumps;
use super::super::types::{Bitboard, Color, Move, MoveList, Piece, PieceCode, Square};
use super::super::Board;

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, side: Color, targets: Bitboard, moves: &mut MoveList) {
        let knight = PieceCode::new(side, Piece::Knight);
        for &to in knight_jumps(from) {
            let occupant = self.code_at(to);
            if !occupant.is_color(side) && targets.contains(to) {
                moves.push(Move::new(from, to, knight, occupant).confirmed());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Board;

    #[test]
    fn test_pinned_knight_has_no_moves() {
        let mut board = Board::from_fen("4k3/8/8/b7/8/8/3N4/4K3 w - - 0 1");
        let moves = board.generate_moves();
        assert!(moves.iter().all(|m| m.from().to_string() != "d2"));
    }

    #[test]
    fn test_knight_in_corner() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
        let mut names: Vec<String> = board
            .generate_moves()
            .iter()
            .filter(|m| m.from().to_string() == "a1")
            .map(|m| m.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a1b3", "a1c2"]);
    }
}
