//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceCode};
use super::square::Square;

const FLAG_EN_PASSANT: u8 = 1 << 0;
const FLAG_CASTLE: u8 = 1 << 1;
const FLAG_CONFIRMED: u8 = 1 << 2;

/// One ply.
///
/// Besides the two squares a move records the piece standing on the start
/// square and the piece it removes (already resolved to the passed pawn for
/// en passant), so it can be reversed without consulting the board.
///
/// Equality and hashing only look at start, target and promotion kind.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    #[cfg_attr(feature = "serde", serde(skip))]
    moving: PieceCode,
    #[cfg_attr(feature = "serde", serde(skip))]
    captured: PieceCode,
    promotion: Option<Piece>,
    flags: u8,
}

impl Move {
    #[inline]
    #[must_use]
    pub(crate) const fn new(
        from: Square,
        to: Square,
        moving: PieceCode,
        captured: PieceCode,
    ) -> Self {
        Move {
            from,
            to,
            moving,
            captured,
            promotion: None,
            flags: 0,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }

    #[inline]
    #[must_use]
    pub(crate) const fn as_en_passant(mut self) -> Self {
        self.flags |= FLAG_EN_PASSANT;
        self
    }

    #[inline]
    #[must_use]
    pub(crate) const fn as_castle(mut self) -> Self {
        self.flags |= FLAG_CASTLE;
        self
    }

    /// Copy of this move marked as already proven legal by generation
    #[inline]
    #[must_use]
    pub(crate) const fn confirmed(mut self) -> Self {
        self.flags |= FLAG_CONFIRMED;
        self
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Piece standing on the start square before the move
    #[inline]
    #[must_use]
    pub const fn moving(self) -> PieceCode {
        self.moving
    }

    /// Piece this move removes, `PieceCode::EMPTY` for a quiet move
    #[inline]
    #[must_use]
    pub const fn captured(self) -> PieceCode {
        self.captured
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Returns true if this move removes a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        !self.captured.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.flags & FLAG_CASTLE != 0
    }

    /// Returns true once generation has proven the move legal
    #[inline]
    #[must_use]
    pub const fn is_confirmed_legal(self) -> bool {
        self.flags & FLAG_CONFIRMED != 0
    }

    /// Square of the pawn an en-passant capture removes
    #[inline]
    #[must_use]
    pub(crate) const fn en_passant_victim(self) -> Square {
        Square::at(self.from.rank(), self.to.file())
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::new(
    Square::from_index_unchecked(0),
    Square::from_index_unchecked(0),
    PieceCode::EMPTY,
    PieceCode::EMPTY,
);

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Keep only the moves for which `keep` returns true, preserving order
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Find the move matching the given squares and promotion
    #[must_use]
    pub fn find(&self, from: Square, to: Square, promotion: Option<Piece>) -> Option<Move> {
        self.iter()
            .copied()
            .find(|m| m.from == from && m.to == to && m.promotion == promotion)
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
