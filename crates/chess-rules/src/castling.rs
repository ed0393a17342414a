//! Castling rights and their revocation rules.

use chess_core::{Color, File, Piece, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A castling rights string that is not "-" or an ordered subset of "KQkq".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid castling format: {0}")]
pub struct CastlingParseError(pub String);

/// The four castling rights of a game.
///
/// Stored as a bitset whose canonical text form is the FEN castling field:
/// the held rights in K, Q, k, q order, or "-" when none remain. Rights are
/// only ever revoked over the lifetime of a game, never granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingAvailability(u8);

impl CastlingAvailability {
    const WHITE_KINGSIDE: u8 = 0b0001;
    const WHITE_QUEENSIDE: u8 = 0b0010;
    const BLACK_KINGSIDE: u8 = 0b0100;
    const BLACK_QUEENSIDE: u8 = 0b1000;

    /// No rights at all ("-").
    pub const NONE: CastlingAvailability = CastlingAvailability(0);
    /// All four rights ("KQkq").
    pub const ALL: CastlingAvailability = CastlingAvailability(0b1111);

    /// Parses a castling rights string.
    ///
    /// Accepts "-" or an ordered subset of "KQkq" (each letter at most
    /// once, in that relative order). The empty string normalizes to no
    /// rights at construction; its canonical form is always "-".
    pub fn parse(s: &str) -> Result<Self, CastlingParseError> {
        if s == "-" || s.is_empty() {
            return Ok(Self::NONE);
        }

        let mut remaining = [
            ('K', Self::WHITE_KINGSIDE),
            ('Q', Self::WHITE_QUEENSIDE),
            ('k', Self::BLACK_KINGSIDE),
            ('q', Self::BLACK_QUEENSIDE),
        ]
        .into_iter();

        let mut flags = 0u8;
        for c in s.chars() {
            match remaining.by_ref().find(|&(letter, _)| letter == c) {
                Some((_, flag)) => flags |= flag,
                None => return Err(CastlingParseError(s.to_string())),
            }
        }
        Ok(CastlingAvailability(flags))
    }

    /// Returns true if no right remains for either side.
    #[inline]
    pub const fn can_neither_side_castle(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the given side may still castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        };
        (self.0 & flag) != 0
    }

    /// Returns true if the given side may still castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        };
        (self.0 & flag) != 0
    }

    /// Strips both of the given color's rights after a completed castle.
    ///
    /// A side that has castled forfeits the unused right as well.
    pub fn update_after_castling_move(&mut self, color: Color) {
        self.remove_color(color);
    }

    /// Updates rights after an ordinary (non-castling) move.
    ///
    /// A king move strips both of its color's rights. A rook moving off the
    /// a-file strips that color's queenside right, off the h-file its
    /// kingside right. Anything else leaves the rights untouched.
    pub fn update_after_regular_move(&mut self, piece: Piece, color: Color, from: Square) {
        if self.can_neither_side_castle() {
            return;
        }

        match piece {
            Piece::King => self.remove_color(color),
            Piece::Rook => match from.file() {
                File::A => self.remove_queenside(color),
                File::H => self.remove_kingside(color),
                _ => {}
            },
            _ => {}
        }
    }

    fn remove_color(&mut self, color: Color) {
        let mask = match color {
            Color::White => !(Self::WHITE_KINGSIDE | Self::WHITE_QUEENSIDE),
            Color::Black => !(Self::BLACK_KINGSIDE | Self::BLACK_QUEENSIDE),
        };
        self.0 &= mask;
    }

    fn remove_kingside(&mut self, color: Color) {
        let mask = match color {
            Color::White => !Self::WHITE_KINGSIDE,
            Color::Black => !Self::BLACK_KINGSIDE,
        };
        self.0 &= mask;
    }

    fn remove_queenside(&mut self, color: Color) {
        let mask = match color {
            Color::White => !Self::WHITE_QUEENSIDE,
            Color::Black => !Self::BLACK_QUEENSIDE,
        };
        self.0 &= mask;
    }
}

impl FromStr for CastlingAvailability {
    type Err = CastlingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CastlingAvailability {
    /// Always canonical: rights in K, Q, k, q order, "-" when none remain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.can_neither_side_castle() {
            return write!(f, "-");
        }
        if self.can_castle_kingside(Color::White) {
            write!(f, "K")?;
        }
        if self.can_castle_queenside(Color::White) {
            write!(f, "Q")?;
        }
        if self.can_castle_kingside(Color::Black) {
            write!(f, "k")?;
        }
        if self.can_castle_queenside(Color::Black) {
            write!(f, "q")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_and_none() {
        assert_eq!(CastlingAvailability::parse("KQkq"), Ok(CastlingAvailability::ALL));
        assert_eq!(CastlingAvailability::parse("-"), Ok(CastlingAvailability::NONE));
        // Empty normalizes to no rights; the canonical form stays "-".
        let empty = CastlingAvailability::parse("").unwrap();
        assert!(empty.can_neither_side_castle());
        assert_eq!(empty.to_string(), "-");
    }

    #[test]
    fn parse_subsets() {
        let rights: CastlingAvailability = "Kq".parse().unwrap();
        assert!(rights.can_castle_kingside(Color::White));
        assert!(!rights.can_castle_queenside(Color::White));
        assert!(!rights.can_castle_kingside(Color::Black));
        assert!(rights.can_castle_queenside(Color::Black));
        assert_eq!(rights.to_string(), "Kq");
    }

    #[test]
    fn parse_rejects_bad_strings() {
        assert!(CastlingAvailability::parse("x").is_err());
        assert!(CastlingAvailability::parse("KQkqq").is_err());
        assert!(CastlingAvailability::parse("qK").is_err());
        assert!(CastlingAvailability::parse("KK").is_err());
        assert!(CastlingAvailability::parse("--").is_err());
        let err = CastlingAvailability::parse("xyz").unwrap_err();
        assert_eq!(err.to_string(), "invalid castling format: xyz");
    }

    #[test]
    fn castling_move_forfeits_both_rights() {
        let mut rights = CastlingAvailability::ALL;
        rights.update_after_castling_move(Color::White);
        assert!(!rights.can_castle_kingside(Color::White));
        assert!(!rights.can_castle_queenside(Color::White));
        assert!(rights.can_castle_kingside(Color::Black));
        assert_eq!(rights.to_string(), "kq");

        rights.update_after_castling_move(Color::Black);
        assert!(rights.can_neither_side_castle());
        assert_eq!(rights.to_string(), "-");
    }

    #[test]
    fn king_move_strips_both_rights() {
        let mut rights = CastlingAvailability::ALL;
        rights.update_after_regular_move(Piece::King, Color::White, Square::E1);
        assert_eq!(rights.to_string(), "kq");
    }

    #[test]
    fn rook_moves_strip_one_right() {
        let mut rights = CastlingAvailability::ALL;
        rights.update_after_regular_move(Piece::Rook, Color::White, Square::A1);
        assert_eq!(rights.to_string(), "Kkq");
        rights.update_after_regular_move(Piece::Rook, Color::Black, Square::H8);
        assert_eq!(rights.to_string(), "Kq");
        rights.update_after_regular_move(Piece::Rook, Color::White, Square::H1);
        assert_eq!(rights.to_string(), "q");
        rights.update_after_regular_move(Piece::Rook, Color::Black, Square::A8);
        assert_eq!(rights.to_string(), "-");
    }

    #[test]
    fn other_moves_leave_rights_untouched() {
        let mut rights = CastlingAvailability::ALL;
        rights.update_after_regular_move(Piece::Queen, Color::White, Square::D1);
        rights.update_after_regular_move(Piece::Pawn, Color::Black, Square::A8);
        let d_file_rook = Square::D1;
        rights.update_after_regular_move(Piece::Rook, Color::White, d_file_rook);
        assert_eq!(rights, CastlingAvailability::ALL);
    }

    #[test]
    fn update_is_noop_when_exhausted() {
        let mut rights = CastlingAvailability::NONE;
        rights.update_after_regular_move(Piece::King, Color::White, Square::E1);
        assert_eq!(rights, CastlingAvailability::NONE);
    }
}
