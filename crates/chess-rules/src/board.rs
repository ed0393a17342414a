//! Mailbox board representation.

use chess_core::{Color, File, Piece, Rank, Square};
use std::fmt;
use thiserror::Error;

/// Errors raised when parsing a board-only FEN fragment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardFenError {
    #[error("expected a board-only FEN fragment, got a full FEN: {0}")]
    NotAFragment(String),

    #[error("invalid number of ranks in FEN: expected 8, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{0}' in rank {1}")]
    InvalidChar(char, u8),

    #[error("rank {0} has {1} files, expected 8")]
    InvalidFileCount(u8, u32),
}

/// An 8x8 chess board.
///
/// The board is a flat array of 64 optional (piece, color) pairs indexed by
/// [`Square`]: every square always exists and holds at most one piece. The
/// board owns occupancy only; move legality is the game's responsibility.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<(Piece, Color)>; 64],
}

impl Board {
    /// The board fragment of the standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting position.
    pub fn new() -> Self {
        Self::from_fen(Self::STARTPOS).expect("starting position is valid")
    }

    /// Parses a board-only FEN fragment (the first field of a full FEN).
    ///
    /// Ranks are read from rank 8 down to rank 1. Digits 1-8 advance that
    /// many empty files; piece letters place pieces, with case selecting
    /// the color. A full six-field FEN is rejected with a distinct error.
    pub fn from_fen(board_fen: &str) -> Result<Self, BoardFenError> {
        if board_fen.contains(' ') {
            return Err(BoardFenError::NotAFragment(board_fen.to_string()));
        }

        let fragments: Vec<&str> = board_fen.split('/').collect();
        if fragments.len() != 8 {
            return Err(BoardFenError::InvalidRankCount(fragments.len()));
        }

        let mut board = Board::empty();
        for (i, fragment) in fragments.iter().enumerate() {
            let rank_number = 8 - i as u8;
            let rank_index = rank_number - 1;
            let mut file = 0u32;

            for c in fragment.chars() {
                if let Some(count) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += count;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    // fails exactly when the rank has already filled 8 files
                    let sq = u8::try_from(file)
                        .ok()
                        .and_then(|f| Square::from_indices(f, rank_index).ok());
                    let Some(sq) = sq else {
                        return Err(BoardFenError::InvalidFileCount(rank_number, file + 1));
                    };
                    board.squares[sq.index() as usize] = Some((piece, color));
                    file += 1;
                } else {
                    return Err(BoardFenError::InvalidChar(c, rank_number));
                }
            }
            if file != 8 {
                return Err(BoardFenError::InvalidFileCount(rank_number, file));
            }
        }

        Ok(board)
    }

    /// Returns the piece and color on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.squares[sq.index() as usize]
    }

    /// Returns true if the given square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index() as usize].is_some()
    }

    /// Places a piece on a square, replacing any previous occupant.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece, color: Color) {
        self.squares[sq.index() as usize] = Some((piece, color));
    }

    /// Removes the piece from a square, returning it.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<(Piece, Color)> {
        self.squares[sq.index() as usize].take()
    }

    /// Moves whatever occupies `from` onto `to`, unconditionally.
    ///
    /// The destination occupant is overwritten and the source is cleared.
    /// No legality check is made here.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let moving = self.clear(from);
        self.squares[to.index() as usize] = moving;
    }

    /// Serializes the board back to its FEN fragment.
    ///
    /// Exact inverse of [`Board::from_fen`] for every reachable board.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for &rank in Rank::ALL.iter().rev() {
            let mut empty_count = 0;
            for file in File::ALL {
                let sq = Square::new(file, rank);
                if let Some((piece, color)) = self.piece_at(sq) {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_fen_char(color));
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank != Rank::R1 {
                fen.push('/');
            }
        }

        fen
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}
