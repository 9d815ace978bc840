use crate::zobrist::ZOBRIST;

use super::types::{CastleWing, Color, Piece, PieceCode, Square};

/// The authoritative position.
///
/// Squares hold packed [`PieceCode`]s. The side to move is the parity of
/// `ply`. Everything needed to reverse a move lives in per-ply histories,
/// each exactly `ply - root_ply + 1` entries long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [PieceCode; 64],
    /// Plies since the (possibly implied) game start
    pub(crate) ply: u32,
    /// Ply the board was loaded at; histories start here
    pub(crate) root_ply: u32,
    // castle_lost[color][wing]: None while the right survives, else the ply it was lost at
    pub(crate) castle_lost: [[Option<u32>; 2]; 2],
    /// En-passant target square after each ply
    pub(crate) ep_history: Vec<Option<Square>>,
    /// Halfmove clock after each ply
    pub(crate) clock_history: Vec<u32>,
    /// Truncated position hash after each ply
    pub(crate) hash_history: Vec<u32>,
    pub(crate) king_square: [Square; 2],
    /// Census indexed by `PieceCode::bits()`
    pub(crate) piece_count: [u8; 16],
    pub(crate) total_count: [u8; 2],
    pub(crate) hash: u64,
}

impl Board {
    /// Standard starting position
    pub fn new() -> Self {
        let mut board = Board::empty(0);
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            let file = file as u8;
            board.put_piece(Square::at(0, file), PieceCode::new(Color::White, *piece));
            board.put_piece(Square::at(7, file), PieceCode::new(Color::Black, *piece));
            board.put_piece(Square::at(1, file), PieceCode::new(Color::White, Piece::Pawn));
            board.put_piece(Square::at(6, file), PieceCode::new(Color::Black, Piece::Pawn));
        }
        board.castle_lost = [[None; 2]; 2];
        board.seal(None, 0);
        board
    }

    /// Bare board at `root_ply` with every castling right marked lost.
    /// Must be finished with [`Board::seal`].
    pub(crate) fn empty(root_ply: u32) -> Self {
        Board {
            squares: [PieceCode::EMPTY; 64],
            ply: root_ply,
            root_ply,
            castle_lost: [[Some(root_ply); 2]; 2],
            ep_history: Vec::new(),
            clock_history: Vec::new(),
            hash_history: Vec::new(),
            king_square: [Square::at(0, 4), Square::at(7, 4)],
            piece_count: [0; 16],
            total_count: [0; 2],
            hash: 0,
        }
    }

    /// Start the histories and compute the hash from scratch
    pub(crate) fn seal(&mut self, en_passant: Option<Square>, halfmove_clock: u32) {
        self.ep_history.clear();
        self.clock_history.clear();
        self.hash_history.clear();
        self.ep_history.push(en_passant);
        self.clock_history.push(halfmove_clock);
        self.hash = self.calculate_hash();
        self.hash_history.push(self.hash as u32);
    }

    /// Place `code` on an empty square, keeping census, kings and hash in step
    #[inline]
    pub(crate) fn put_piece(&mut self, sq: Square, code: PieceCode) {
        debug_assert!(self.squares[sq.index()].is_empty());
        let color = code.color();
        self.squares[sq.index()] = code;
        self.piece_count[code.bits() as usize] += 1;
        self.total_count[color.index()] += 1;
        if code.piece() == Some(Piece::King) {
            self.king_square[color.index()] = sq;
        }
        self.hash ^= ZOBRIST.piece(code, sq);
    }

    /// Remove and return whatever stands on `sq`
    #[inline]
    pub(crate) fn take_piece(&mut self, sq: Square) -> PieceCode {
        let code = self.squares[sq.index()];
        if code.is_empty() {
            return code;
        }
        self.squares[sq.index()] = PieceCode::EMPTY;
        self.piece_count[code.bits() as usize] -= 1;
        self.total_count[code.color().index()] -= 1;
        self.hash ^= ZOBRIST.piece(code, sq);
        code
    }

    /// Position hash computed from nothing but the current placement,
    /// side to move, surviving rights and en-passant availability
    pub(crate) fn calculate_hash(&self) -> u64 {
        let mut hash = 0u64;
        for (idx, &code) in self.squares.iter().enumerate() {
            hash ^= ZOBRIST.piece(code, Square::from_index_unchecked(idx));
        }
        if self.side_to_move() == Color::Black {
            hash ^= ZOBRIST.side_to_move_key;
        }
        for color in Color::BOTH {
            for wing in CastleWing::BOTH {
                if self.has_castling_right(color, wing) {
                    hash ^= ZOBRIST.castling(color, wing);
                }
            }
        }
        hash ^ self.en_passant_key(self.en_passant_square(), self.side_to_move())
    }

    /// Hash contribution of an en-passant target: the file key when a pawn of
    /// `side` stands beside the pawn that just double-pushed, else zero
    pub(crate) fn en_passant_key(&self, target: Option<Square>, side: Color) -> u64 {
        let Some(target) = target else {
            return 0;
        };
        let victim = target.offset(-side.pawn_step());
        let own_pawn = PieceCode::new(side, Piece::Pawn);
        let file = victim.file();
        let beside = |df: i8| {
            let f = file as i8 + df;
            (0..8).contains(&f) && self.squares[Square::at(victim.rank(), f as u8).index()] == own_pawn
        };
        if beside(-1) || beside(1) {
            ZOBRIST.en_passant(target.file())
        } else {
            0
        }
    }

    /// Content of a square as its packed code
    #[inline]
    #[must_use]
    pub fn code_at(&self, sq: Square) -> PieceCode {
        self.squares[sq.index()]
    }

    /// Color and kind of the piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()].split()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.ply % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.ply / 2 + 1
    }

    /// Plies since the last pawn move or capture
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.clock_history.last().copied().unwrap_or(0)
    }

    /// Square a pawn skipped over on the last ply, if it double-pushed
    #[inline]
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.ep_history.last().copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn has_castling_right(&self, color: Color, wing: CastleWing) -> bool {
        self.castle_lost[color.index()][wing.index()].is_none()
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    /// Number of `piece`s of `color` on the board
    #[inline]
    #[must_use]
    pub fn piece_count(&self, color: Color, piece: Piece) -> u8 {
        self.piece_count[PieceCode::new(color, piece).bits() as usize]
    }

    /// Number of pieces of `color`, king included
    #[inline]
    #[must_use]
    pub fn total_piece_count(&self, color: Color) -> u8 {
        self.total_count[color.index()]
    }

    /// Plies recorded in the histories beyond the loaded position
    #[inline]
    pub(crate) fn plies_played(&self) -> usize {
        (self.ply - self.root_ply) as usize
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
