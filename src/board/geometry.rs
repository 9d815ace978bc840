//! Precomputed attack geometry.
//!
//! Pure lookup data: how far each ray runs from a square before leaving the
//! board, and the knight/king jump targets of every square.

#![allow(clippy::needless_range_loop)] // Index loops are clearer for board coordinates

use once_cell::sync::Lazy;

use super::types::{Bitboard, Square};

/// One of the eight compass directions a slider moves along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Direction {
    pub(crate) index: usize,
    /// Index delta of one step
    pub(crate) delta: i8,
    /// Rank and file deltas of one step
    pub(crate) rank_step: i8,
    pub(crate) file_step: i8,
}

impl Direction {
    /// True for the four diagonal directions (bishop lines)
    #[inline]
    pub(crate) const fn is_diagonal(self) -> bool {
        self.rank_step != 0 && self.file_step != 0
    }

    #[inline]
    pub(crate) const fn opposite(self) -> Direction {
        DIRECTIONS[self.index ^ 1]
    }
}

const fn direction(index: usize, rank_step: i8, file_step: i8) -> Direction {
    Direction {
        index,
        delta: rank_step * 8 + file_step,
        rank_step,
        file_step,
    }
}

/// Straight directions first, then diagonals; opposite directions are paired
/// so that `index ^ 1` flips a direction.
pub(crate) const DIRECTIONS: [Direction; 8] = [
    direction(0, 1, 0),   // north
    direction(1, -1, 0),  // south
    direction(2, 0, 1),   // east
    direction(3, 0, -1),  // west
    direction(4, 1, 1),   // north-east
    direction(5, -1, -1), // south-west
    direction(6, 1, -1),  // north-west
    direction(7, -1, 1),  // south-east
];

pub(crate) const STRAIGHT: [Direction; 4] = [DIRECTIONS[0], DIRECTIONS[1], DIRECTIONS[2], DIRECTIONS[3]];
pub(crate) const DIAGONAL: [Direction; 4] = [DIRECTIONS[4], DIRECTIONS[5], DIRECTIONS[6], DIRECTIONS[7]];

/// Up to eight jump targets of a square.
#[derive(Clone, Copy, Debug)]
pub(crate) struct JumpList {
    squares: [Square; 8],
    len: u8,
}

impl JumpList {
    const fn empty() -> Self {
        JumpList {
            squares: [Square::from_index_unchecked(0); 8],
            len: 0,
        }
    }

    fn push(&mut self, sq: Square) {
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }
}

/// `RAY_LENGTH[sq][dir]` - steps available from `sq` in `DIRECTIONS[dir]`
static RAY_LENGTH: Lazy<[[u8; 8]; 64]> = Lazy::new(|| {
    let mut lengths = [[0u8; 8]; 64];
    for sq in 0..64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        for dir in DIRECTIONS {
            let mut steps = 0;
            let mut r = rank + dir.rank_step;
            let mut f = file + dir.file_step;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                steps += 1;
                r += dir.rank_step;
                f += dir.file_step;
            }
            lengths[sq][dir.index] = steps;
        }
    }
    lengths
});

fn jump_table(offsets: &[(i8, i8)]) -> [JumpList; 64] {
    let mut table = [JumpList::empty(); 64];
    for sq in 0..64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        for &(dr, df) in offsets {
            let r = rank + dr;
            let f = file + df;
            if (0..8).contains(&r) && (0..8).contains(&f) {
                table[sq].push(Square::at(r as u8, f as u8));
            }
        }
    }
    table
}

static KNIGHT_JUMPS: Lazy<[JumpList; 64]> = Lazy::new(|| {
    jump_table(&[
        (2, 1),
        (2, -1),
        (-2, 1),
        (-2, -1),
        (1, 2),
        (1, -2),
        (-1, 2),
        (-1, -2),
    ])
});

static KING_STEPS: Lazy<[JumpList; 64]> = Lazy::new(|| {
    jump_table(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});

#[inline]
pub(crate) fn knight_jumps(sq: Square) -> &'static [Square] {
    KNIGHT_JUMPS[sq.index()].as_slice()
}

#[inline]
pub(crate) fn king_steps(sq: Square) -> &'static [Square] {
    KING_STEPS[sq.index()].as_slice()
}

/// Squares from `sq` (exclusive) outwards along `dir`, nearest first
#[inline]
pub(crate) fn ray(sq: Square, dir: Direction) -> Ray {
    Ray {
        current: sq,
        delta: dir.delta,
        remaining: RAY_LENGTH[sq.index()][dir.index],
    }
}

/// Iterator over the squares of one ray.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Ray {
    current: Square,
    delta: i8,
    remaining: u8,
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = self.current.offset(self.delta);
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize;
        (len, Some(len))
    }
}

/// `BETWEEN[a][b]` - squares strictly between two squares on a shared line,
/// empty when they do not share a rank, file or diagonal
static BETWEEN: Lazy<Box<[[Bitboard; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[Bitboard::EMPTY; 64]; 64]);
    for from in 0..64 {
        let origin = Square::from_index_unchecked(from);
        for dir in DIRECTIONS {
            let mut passed = Bitboard::EMPTY;
            for sq in ray(origin, dir) {
                table[from][sq.index()] = passed;
                passed.insert(sq);
            }
        }
    }
    table
});

#[inline]
pub(crate) fn between(a: Square, b: Square) -> Bitboard {
    BETWEEN[a.index()][b.index()]
}

/// Squares a pawn of the given forward step attacks from `sq`
#[inline]
pub(crate) fn pawn_capture_targets(sq: Square, forward: i8) -> impl Iterator<Item = Square> {
    let file = sq.file();
    let rank = sq.rank() as i8 + forward.signum();
    let on_board = (0..8).contains(&rank);
    [-1i8, 1]
        .into_iter()
        .filter(move |df| on_board && (0..8).contains(&(file as i8 + df)))
        .map(move |df| Square::at(rank as u8, (file as i8 + df) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_directions_pair_with_opposites() {
        for dir in DIRECTIONS {
            let back = dir.opposite();
            assert_eq!(dir.delta, -back.delta);
            assert_eq!(dir.is_diagonal(), back.is_diagonal());
        }
        assert!(STRAIGHT.iter().all(|d| !d.is_diagonal()));
        assert!(DIAGONAL.iter().all(|d| d.is_diagonal()));
    }

    #[test]
    fn test_ray_stops_at_edge() {
        let north: Vec<String> = ray(sq("e6"), DIRECTIONS[0]).map(|s| s.to_string()).collect();
        assert_eq!(north, vec!["e7", "e8"]);
        assert_eq!(ray(sq("h4"), DIRECTIONS[2]).count(), 0);
        let south_west: Vec<String> = ray(sq("c3"), DIRECTIONS[5]).map(|s| s.to_string()).collect();
        assert_eq!(south_west, vec!["b2", "a1"]);
    }

    #[test]
    fn test_knight_jump_counts() {
        assert_eq!(knight_jumps(sq("a1")).len(), 2);
        assert_eq!(knight_jumps(sq("b1")).len(), 3);
        assert_eq!(knight_jumps(sq("d4")).len(), 8);
    }

    #[test]
    fn test_king_step_counts() {
        assert_eq!(king_steps(sq("a1")).len(), 3);
        assert_eq!(king_steps(sq("e1")).len(), 5);
        assert_eq!(king_steps(sq("e4")).len(), 8);
    }

    #[test]
    fn test_between_masks() {
        let between_a1_h8: Vec<String> = between(sq("a1"), sq("h8")).iter().map(|s| s.to_string()).collect();
        assert_eq!(between_a1_h8, vec!["b2", "c3", "d4", "e5", "f6", "g7"]);
        assert_eq!(between(sq("e1"), sq("e8")), between(sq("e8"), sq("e1")));
        assert!(between(sq("e1"), sq("e2")).is_empty());
        assert!(between(sq("a1"), sq("b3")).is_empty());
    }

    #[test]
    fn test_pawn_capture_targets_respect_edges() {
        let white_a: Vec<String> = pawn_capture_targets(sq("a2"), 8).map(|s| s.to_string()).collect();
        assert_eq!(white_a, vec!["b3"]);
        let black_e: Vec<String> = pawn_capture_targets(sq("e7"), -8).map(|s| s.to_string()).collect();
        assert_eq!(black_e, vec!["d6", "f6"]);
        assert_eq!(pawn_capture_targets(sq("e8"), 8).count(), 0);
    }
}
