use std::str::FromStr;

use log::debug;

use super::error::{FenError, MoveError, MoveParseError};
use super::types::{king_home, CastleWing, Color, Move, Piece, PieceCode, Square};
use super::Board;

/// Standard starting position in FEN
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(field: &str) -> Result<[PieceCode; 64], FenError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::BadRankCount { found: rows.len() });
    }

    let mut squares = [PieceCode::EMPTY; 64];
    for (row_idx, row) in rows.iter().enumerate() {
        let rank = 7 - row_idx as u8;
        let mut file = 0usize;
        for c in row.chars() {
            if let Some(gap) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += gap as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file < 8 {
                    squares[Square::at(rank, file as u8).index()] = PieceCode::new(color, piece);
                }
                file += 1;
            }
            if file > 8 {
                return Err(FenError::BadRankLength {
                    rank: rank as usize + 1,
                    squares: file,
                });
            }
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank: rank as usize + 1,
                squares: file,
            });
        }
    }

    for color in Color::BOTH {
        let king = PieceCode::new(color, Piece::King);
        let found = squares.iter().filter(|&&code| code == king).count();
        if found != 1 {
            return Err(FenError::KingCount { color, found });
        }
    }
    Ok(squares)
}

/// Largest clock or ply a loaded position may carry, leaving room for the
/// game to continue without the counters wrapping
const MAX_COUNTER: u32 = u32::MAX / 2;

fn parse_counter(field: Option<&str>, default: u32, err: fn(String) -> FenError) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| err(text.to_string())),
    }
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The halfmove clock and fullmove number may be omitted (they default to
    /// 0 and 1). Castling letters only grant a right when king and rook still
    /// stand on their home squares.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();
        let mut next = |field: &'static str| fields.next().ok_or(FenError::MissingField { field });

        let placement = next("piece placement")?;
        let active = next("active color")?;
        let castling = next("castling availability")?;
        let en_passant = next("en passant target")?;
        let halfmove = fields.next();
        let fullmove = fields.next();

        let squares = parse_placement(placement)?;

        let side = match active {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = Vec::with_capacity(4);
        for c in castling.chars() {
            let right = match c {
                'K' => (Color::White, CastleWing::King),
                'Q' => (Color::White, CastleWing::Queen),
                'k' => (Color::Black, CastleWing::King),
                'q' => (Color::Black, CastleWing::Queen),
                '-' => continue,
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
            rights.push(right);
        }

        let ep_target = if en_passant == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: en_passant.to_string(),
            };
            let sq: Square = en_passant.parse().map_err(|_| invalid())?;
            // The skipped square sits behind a pawn of the side that just moved
            let expected_rank = match side {
                Color::White => 5,
                Color::Black => 2,
            };
            if sq.rank() != expected_rank {
                return Err(invalid());
            }
            // The pushed pawn stands in front of the target, its start square behind it
            let pushed = sq.offset(-side.pawn_step());
            let origin = sq.offset(side.pawn_step());
            let enemy_pawn = PieceCode::new(side.opponent(), Piece::Pawn);
            if squares[pushed.index()] != enemy_pawn
                || !squares[sq.index()].is_empty()
                || !squares[origin.index()].is_empty()
            {
                return Err(invalid());
            }
            Some(sq)
        };

        let halfmove_clock = parse_counter(halfmove, 0, |found| FenError::InvalidHalfmoveClock { found })?;
        if halfmove_clock > MAX_COUNTER {
            return Err(FenError::InvalidHalfmoveClock {
                found: halfmove.unwrap_or_default().to_string(),
            });
        }
        let fullmove_number = parse_counter(fullmove, 1, |found| FenError::InvalidFullmoveNumber { found })?.max(1);
        let root_ply = (fullmove_number - 1)
            .checked_mul(2)
            .and_then(|ply| ply.checked_add(side.index() as u32))
            .filter(|&ply| ply <= MAX_COUNTER)
            .ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: fullmove.unwrap_or_default().to_string(),
            })?;

        let mut board = Board::empty(root_ply);
        for (idx, &code) in squares.iter().enumerate() {
            if !code.is_empty() {
                board.put_piece(Square::from_index_unchecked(idx), code);
            }
        }
        for (color, wing) in rights {
            let king = PieceCode::new(color, Piece::King);
            let rook = PieceCode::new(color, Piece::Rook);
            if board.code_at(king_home(color)) == king && board.code_at(wing.rook_home(color)) == rook {
                board.castle_lost[color.index()][wing.index()] = None;
            }
        }
        board.seal(ep_target, halfmove_clock);

        debug!("loaded position {fen} (ply {root_ply}, hash {:#018x})", board.hash);
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::at(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move() {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        for color in Color::BOTH {
            for wing in CastleWing::BOTH {
                if self.has_castling_right(color, wing) {
                    castling.push(wing.fen_char(color));
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_square()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }

    /// Resolve long algebraic text ("e2e4", "e7e8q") to the matching legal move.
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveError> {
        let (from, to, promotion) = parse_coordinates(text)?;
        self.generate_moves()
            .find(from, to, promotion)
            .ok_or_else(|| MoveError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse a move in long algebraic notation and make it on the board.
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, MoveError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(mv)
    }
}

/// Split long algebraic move text into start, target and promotion kind
/// without consulting any position.
pub fn parse_coordinates(text: &str) -> Result<(Square, Square, Option<Piece>), MoveParseError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 4 || chars.len() > 5 {
        return Err(MoveParseError::InvalidLength { len: chars.len() });
    }

    let square = |pair: &[char]| {
        pair.iter()
            .collect::<String>()
            .parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: text.to_string(),
            })
    };
    let from = square(&chars[0..2])?;
    let to = square(&chars[2..4])?;

    let promotion = match chars.get(4) {
        None => None,
        Some(&c) => Some(
            Piece::from_char(c)
                .filter(|piece| piece.is_promotion_choice())
                .ok_or(MoveParseError::InvalidPromotion { char: c })?,
        ),
    };
    Ok((from, to, promotion))
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
