//! Board coordinates: files, ranks, and squares.

use std::fmt;
use thiserror::Error;

/// A coordinate left the 8x8 board.
///
/// Raised by coordinate arithmetic and by integer-index construction.
/// The carried value is the offending index, which may be negative.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OutOfBoard {
    #[error("file {0} is out of board (must be between 0 and 7)")]
    File(i16),
    #[error("rank {0} is out of board (must be between 0 and 7)")]
    Rank(i16),
}

/// A square name that is not two characters of file letter + rank digit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareNameError {
    #[error("square name is empty")]
    Empty,
    #[error("invalid square: {0}")]
    Invalid(String),
}

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from a character ('a'-'h').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// Offsets the file by `delta`, failing if the result leaves the board.
    #[inline]
    pub fn offset(self, delta: i8) -> Result<Self, OutOfBoard> {
        let value = self.index() as i16 + delta as i16;
        u8::try_from(value)
            .ok()
            .and_then(File::from_index)
            .ok_or(OutOfBoard::File(value))
    }

    /// Returns the absolute distance to another file.
    #[inline]
    pub const fn distance_to(self, other: File) -> u8 {
        (self.index() as i8 - other.index() as i8).unsigned_abs()
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// Offsets the rank by `delta`, failing if the result leaves the board.
    #[inline]
    pub fn offset(self, delta: i8) -> Result<Self, OutOfBoard> {
        let value = self.index() as i16 + delta as i16;
        u8::try_from(value)
            .ok()
            .and_then(Rank::from_index)
            .ok_or(OutOfBoard::Rank(value))
    }

    /// Returns the absolute distance to another rank.
    #[inline]
    pub const fn distance_to(self, other: Rank) -> u8 {
        (self.index() as i8 - other.index() as i8).unsigned_abs()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the chess board, indexed 0-63.
///
/// A square is a coordinate only; occupancy lives on the board. Squares are
/// indexed in little-endian rank-file mapping:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from integer file and rank indices.
    ///
    /// Fails with [`OutOfBoard`] (naming the offending coordinate) when
    /// either index is outside 0-7.
    pub fn from_indices(file: u8, rank: u8) -> Result<Self, OutOfBoard> {
        let file = File::from_index(file).ok_or(OutOfBoard::File(file as i16))?;
        let rank = Rank::from_index(rank).ok_or(OutOfBoard::Rank(rank as i16))?;
        Ok(Square::new(file, rank))
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Parses a square name, with distinguishable errors for API boundaries.
    ///
    /// An empty name is reported as [`SquareNameError::Empty`]; anything
    /// else that is not a file letter followed by a rank digit is
    /// [`SquareNameError::Invalid`].
    pub fn parse(s: &str) -> Result<Self, SquareNameError> {
        if s.is_empty() {
            return Err(SquareNameError::Empty);
        }
        Self::from_algebraic(s).ok_or_else(|| SquareNameError::Invalid(s.to_string()))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        // self.0 % 8 is always in 0-7
        match File::from_index(self.0 % 8) {
            Some(f) => f,
            None => unreachable!(),
        }
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        // self.0 / 8 is always in 0-7
        match Rank::from_index(self.0 / 8) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Offsets the square by file and rank deltas, failing if either
    /// coordinate leaves the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Result<Self, OutOfBoard> {
        let file = self.file().offset(file_delta)?;
        let rank = self.rank().offset(rank_delta)?;
        Ok(Square::new(file, rank))
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    // Common squares
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(e4.file(), File::E);
        assert_eq!(e4.rank(), Rank::R4);
        assert_eq!(e4.index(), 28);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(
            Square::from_algebraic("e4"),
            Some(Square::new(File::E, Rank::R4))
        );
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_parse_errors() {
        assert_eq!(Square::parse(""), Err(SquareNameError::Empty));
        assert_eq!(
            Square::parse("e"),
            Err(SquareNameError::Invalid("e".to_string()))
        );
        assert_eq!(
            Square::parse("e44"),
            Err(SquareNameError::Invalid("e44".to_string()))
        );
        assert_eq!(
            Square::parse("z3"),
            Err(SquareNameError::Invalid("z3".to_string()))
        );
        assert_eq!(Square::parse("e4"), Ok(Square::new(File::E, Rank::R4)));
    }

    #[test]
    fn square_from_indices() {
        assert_eq!(Square::from_indices(4, 3), Ok(Square::new(File::E, Rank::R4)));
        assert_eq!(Square::from_indices(8, 0), Err(OutOfBoard::File(8)));
        assert_eq!(Square::from_indices(0, 9), Err(OutOfBoard::Rank(9)));
    }

    #[test]
    fn file_offset_bounds() {
        assert_eq!(File::E.offset(2), Ok(File::G));
        assert_eq!(File::B.offset(-1), Ok(File::A));
        assert_eq!(File::H.offset(1), Err(OutOfBoard::File(8)));
        assert_eq!(File::A.offset(-1), Err(OutOfBoard::File(-1)));
    }

    #[test]
    fn rank_offset_bounds() {
        assert_eq!(Rank::R2.offset(2), Ok(Rank::R4));
        assert_eq!(Rank::R8.offset(1), Err(OutOfBoard::Rank(8)));
        assert_eq!(Rank::R1.offset(-1), Err(OutOfBoard::Rank(-1)));
    }

    #[test]
    fn distances() {
        assert_eq!(File::A.distance_to(File::H), 7);
        assert_eq!(File::E.distance_to(File::C), 2);
        assert_eq!(Rank::R4.distance_to(Rank::R4), 0);
        assert_eq!(Rank::R1.distance_to(Rank::R8), 7);
    }

    #[test]
    fn ordering() {
        assert!(File::A < File::B);
        assert!(File::H > File::G);
        assert!(Rank::R1 < Rank::R8);
    }

    #[test]
    fn square_offset() {
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(e4.offset(1, 1), Ok(Square::new(File::F, Rank::R5)));
        assert_eq!(e4.offset(-2, -2), Ok(Square::new(File::C, Rank::R2)));
        assert!(Square::H8.offset(1, 0).is_err());
        assert!(Square::A1.offset(0, -1).is_err());
    }

    #[test]
    fn out_of_board_messages() {
        assert_eq!(
            OutOfBoard::File(8).to_string(),
            "file 8 is out of board (must be between 0 and 7)"
        );
        assert_eq!(
            OutOfBoard::Rank(-1).to_string(),
            "rank -1 is out of board (must be between 0 and 7)"
        );
    }

    proptest! {
        #[test]
        fn algebraic_roundtrip(index in 0u8..64) {
            let sq = Square::from_index(index).unwrap();
            prop_assert_eq!(Square::parse(&sq.to_algebraic()), Ok(sq));
        }
    }
}
