//! Attack detection and the per-position check/pin context.
//!
//! All scans work outwards from the square of interest over the mailbox, so
//! they need no attack maps to be kept up to date.

use super::geometry::{between, king_steps, knight_jumps, pawn_capture_targets, ray, DIRECTIONS};
use super::types::{Bitboard, Color, Piece, PieceCode, Square};
use super::Board;

/// Checks against and pins onto one king.
#[derive(Clone, Debug)]
pub struct CheckContext {
    /// Squares on which a piece resolves a single check: each checker plus
    /// every square strictly between it and the king
    pub checking_squares: Bitboard,
    /// Own pieces that shield the king from an enemy slider
    pub pinned: Bitboard,
    /// Number of checking pieces, capped at 2
    pub check_count: u8,
    /// For each pinned square, the line it may move along (king exclusive,
    /// pinner inclusive)
    pin_ray: [Bitboard; 64],
}

impl CheckContext {
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.check_count > 0
    }

    #[inline]
    #[must_use]
    pub fn is_double_check(&self) -> bool {
        self.check_count >= 2
    }

    /// Line a pinned piece on `sq` may stay on; every square when unpinned
    #[inline]
    #[must_use]
    pub fn pin_ray(&self, sq: Square) -> Bitboard {
        if self.pinned.contains(sq) {
            self.pin_ray[sq.index()]
        } else {
            Bitboard::ALL
        }
    }
}

/// True when `code` is a slider of `color` that moves along lines like `diagonal`
#[inline]
fn slides_along(code: PieceCode, color: Color, diagonal: bool) -> bool {
    match code.split() {
        Some((c, piece)) if c == color => {
            if diagonal {
                piece.attacks_diagonally()
            } else {
                piece.attacks_straight()
            }
        }
        _ => false,
    }
}

impl Board {
    /// Returns true if any piece of `by` attacks `sq`
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.is_attacked_with_vacated(sq, by, None)
    }

    /// Attack test that treats `vacated` as empty. Used to judge king steps,
    /// where the king must not shadow the square behind it from a slider.
    pub(crate) fn is_attacked_with_vacated(&self, sq: Square, by: Color, vacated: Option<Square>) -> bool {
        // Enemy pawns attacking `sq` stand where a pawn of the other color on `sq` would capture
        let pawn = PieceCode::new(by, Piece::Pawn);
        if pawn_capture_targets(sq, -by.pawn_step()).any(|from| self.code_at(from) == pawn) {
            return true;
        }

        let knight = PieceCode::new(by, Piece::Knight);
        if knight_jumps(sq).iter().any(|&from| self.code_at(from) == knight) {
            return true;
        }

        for dir in DIRECTIONS {
            for from in ray(sq, dir) {
                if Some(from) == vacated {
                    continue;
                }
                let code = self.code_at(from);
                if code.is_empty() {
                    continue;
                }
                if slides_along(code, by, dir.is_diagonal()) {
                    return true;
                }
                break;
            }
        }

        let king = PieceCode::new(by, Piece::King);
        king_steps(sq).iter().any(|&from| self.code_at(from) == king)
    }

    /// Returns true if the king of `color` is attacked
    #[inline]
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// Scan outwards from the king of `side` for checking pieces and pins.
    ///
    /// Stops collecting once a second checker is found, since only king
    /// moves can answer a double check.
    #[must_use]
    pub fn compute_check_context(&self, side: Color) -> CheckContext {
        let king = self.king_square(side);
        let enemy = side.opponent();
        let mut ctx = CheckContext {
            checking_squares: Bitboard::EMPTY,
            pinned: Bitboard::EMPTY,
            check_count: 0,
            pin_ray: [Bitboard::EMPTY; 64],
        };

        let pawn = PieceCode::new(enemy, Piece::Pawn);
        for from in pawn_capture_targets(king, side.pawn_step()) {
            if self.code_at(from) == pawn {
                ctx.checking_squares.insert(from);
                ctx.check_count += 1;
            }
        }

        let knight = PieceCode::new(enemy, Piece::Knight);
        for &from in knight_jumps(king) {
            if self.code_at(from) == knight {
                ctx.checking_squares.insert(from);
                ctx.check_count += 1;
            }
        }

        for dir in DIRECTIONS {
            if ctx.check_count >= 2 {
                ctx.check_count = 2;
                return ctx;
            }
            let mut shield: Option<Square> = None;
            for sq in ray(king, dir) {
                let code = self.code_at(sq);
                if code.is_empty() {
                    continue;
                }
                if code.is_color(side) {
                    if shield.is_some() {
                        break;
                    }
                    shield = Some(sq);
                    continue;
                }
                if slides_along(code, enemy, dir.is_diagonal()) {
                    let line = between(king, sq) | Bitboard::from_square(sq);
                    match shield {
                        Some(pinned) => {
                            ctx.pinned.insert(pinned);
                            ctx.pin_ray[pinned.index()] = line;
                        }
                        None => {
                            ctx.checking_squares |= line;
                            ctx.check_count += 1;
                        }
                    }
                }
                break;
            }
        }

        ctx.check_count = ctx.check_count.min(2);
        ctx
    }
}
