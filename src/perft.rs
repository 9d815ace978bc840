use crate::board::{Board, Move};

impl Board {
    /// Count leaf nodes of the legal move tree to `depth` plies
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.reverse(m);
        }

        nodes
    }

    /// Leaf counts below each root move, in generation order
    pub fn divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let moves = self.generate_moves();
        let mut breakdown = Vec::with_capacity(moves.len());
        for m in moves {
            self.make_move(m);
            breakdown.push((m, self.perft(depth - 1)));
            self.reverse(m);
        }
        breakdown
    }
}
