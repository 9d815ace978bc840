//! Castling wings and the fixed squares each castle uses.

use super::piece::Color;
use super::square::Square;

/// Side of the board a castle happens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleWing {
    King,
    Queen,
}

impl CastleWing {
    pub const BOTH: [CastleWing; 2] = [CastleWing::King, CastleWing::Queen];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            CastleWing::King => 0,
            CastleWing::Queen => 1,
        }
    }

    /// Wing of a castle that lands the king on `king_to`
    #[inline]
    #[must_use]
    pub(crate) const fn of_king_target(king_to: Square) -> CastleWing {
        if king_to.file() < 4 {
            CastleWing::Queen
        } else {
            CastleWing::King
        }
    }

    /// Notation letter for this wing and color (`K`, `Q`, `k`, `q`)
    #[must_use]
    pub(crate) const fn fen_char(self, color: Color) -> char {
        match (color, self) {
            (Color::White, CastleWing::King) => 'K',
            (Color::White, CastleWing::Queen) => 'Q',
            (Color::Black, CastleWing::King) => 'k',
            (Color::Black, CastleWing::Queen) => 'q',
        }
    }

    #[must_use]
    pub(crate) const fn rook_home(self, color: Color) -> Square {
        let file = match self {
            CastleWing::King => 7,
            CastleWing::Queen => 0,
        };
        Square::at(color.back_rank(), file)
    }

    #[must_use]
    pub(crate) const fn rook_target(self, color: Color) -> Square {
        let file = match self {
            CastleWing::King => 5,
            CastleWing::Queen => 3,
        };
        Square::at(color.back_rank(), file)
    }

    #[must_use]
    pub(crate) const fn king_target(self, color: Color) -> Square {
        let file = match self {
            CastleWing::King => 6,
            CastleWing::Queen => 2,
        };
        Square::at(color.back_rank(), file)
    }

    /// Files strictly between king and rook that must be empty
    #[must_use]
    pub(crate) const fn empty_files(self) -> &'static [u8] {
        match self {
            CastleWing::King => &[5, 6],
            CastleWing::Queen => &[1, 2, 3],
        }
    }

    /// Files the king crosses or lands on, start file excluded
    #[must_use]
    pub(crate) const fn transit_files(self) -> &'static [u8] {
        match self {
            CastleWing::King => &[5, 6],
            CastleWing::Queen => &[3, 2],
        }
    }
}

/// Home square of the king of `color`
#[inline]
#[must_use]
pub(crate) const fn king_home(color: Color) -> Square {
    Square::at(color.back_rank(), 4)
}
