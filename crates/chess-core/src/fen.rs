//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use crate::{Piece, Rank, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN string must have 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Parsed FEN data.
///
/// Holds the six validated FEN fields in raw form. The rules engine is
/// responsible for converting this into its board and game representation.
/// Parsing is a pure function: each call returns a fresh value and no state
/// is shared between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement string (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
    pub piece_placement: String,
    /// Active color ('w' or 'b')
    pub active_color: char,
    /// Castling availability (e.g., "KQkq", "-")
    pub castling: String,
    /// En passant target square (e.g., "e3", "-")
    pub en_passant: String,
    /// Halfmove clock (moves since the last pawn move or capture)
    pub halfmove_clock: u32,
    /// Fullmove number (starts at 1, increments after Black's move)
    pub fullmove_number: u32,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string into its six validated fields.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let piece_placement = parts[0];
        Self::validate_piece_placement(piece_placement)?;

        let active_color = match parts[1] {
            "w" => 'w',
            "b" => 'b',
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = parts[2];
        Self::validate_castling(castling)?;

        let en_passant = parts[3];
        Self::validate_en_passant(en_passant)?;

        let halfmove_clock = parts[4]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;

        let fullmove_number = parts[5]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;
        if fullmove_number == 0 {
            return Err(FenError::InvalidFullmoveNumber(parts[5].to_string()));
        }

        Ok(FenParser {
            piece_placement: piece_placement.to_string(),
            active_color,
            castling: castling.to_string(),
            en_passant: en_passant.to_string(),
            halfmove_clock,
            fullmove_number,
        })
    }

    fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (i, rank) in ranks.iter().enumerate() {
            let mut files = 0u32;
            for c in rank.chars() {
                if let Some(count) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    files += count;
                } else if Piece::from_fen_char(c).is_some() {
                    files += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
            }
            if files != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} files, expected 8",
                    8 - i,
                    files
                )));
            }
        }

        Ok(())
    }

    /// Castling rights must be "-" or an ordered subset of "KQkq": each
    /// letter at most once, in that relative order.
    fn validate_castling(castling: &str) -> Result<(), FenError> {
        if castling == "-" {
            return Ok(());
        }
        if castling.is_empty() {
            return Err(FenError::InvalidCastlingRights(castling.to_string()));
        }

        let mut remaining = "KQkq".chars();
        for c in castling.chars() {
            if !remaining.by_ref().any(|expected| expected == c) {
                return Err(FenError::InvalidCastlingRights(castling.to_string()));
            }
        }

        Ok(())
    }

    fn validate_en_passant(en_passant: &str) -> Result<(), FenError> {
        if en_passant == "-" {
            return Ok(());
        }

        match Square::from_algebraic(en_passant) {
            Some(sq) if sq.rank() == Rank::R3 || sq.rank() == Rank::R6 => Ok(()),
            _ => Err(FenError::InvalidEnPassantSquare(en_passant.to_string())),
        }
    }

    /// Converts the parsed FEN back to a FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.piece_placement,
            self.active_color,
            self.castling,
            self.en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl Default for FenParser {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_startpos() {
        let fen = FenParser::parse(FenParser::STARTPOS).unwrap();
        assert_eq!(fen.active_color, 'w');
        assert_eq!(fen.castling, "KQkq");
        assert_eq!(fen.en_passant, "-");
        assert_eq!(fen.halfmove_clock, 0);
        assert_eq!(fen.fullmove_number, 1);
    }

    #[test]
    fn parse_custom_position() {
        let fen =
            FenParser::parse("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
                .unwrap();
        assert_eq!(fen.active_color, 'w');
        assert_eq!(fen.halfmove_clock, 2);
        assert_eq!(fen.fullmove_number, 3);
    }

    #[test]
    fn roundtrip() {
        let original = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let parsed = FenParser::parse(original).unwrap();
        assert_eq!(parsed.to_fen(), original);
    }

    #[test]
    fn part_count_law() {
        // Any field count other than 6 fails the same way, regardless of
        // which fields are present.
        assert_eq!(
            FenParser::parse("invalid"),
            Err(FenError::InvalidPartCount(1))
        );
        assert_eq!(
            FenParser::parse("8/8/8/8/8/8/8/8 w KQkq -"),
            Err(FenError::InvalidPartCount(4))
        );
        assert_eq!(
            FenParser::parse("8/8/8/8/8/8/8/8 w KQkq - 0 1 extra"),
            Err(FenError::InvalidPartCount(7))
        );
        let err = FenError::InvalidPartCount(4);
        assert_eq!(err.to_string(), "FEN string must have 6 parts, got 4");
    }

    #[test]
    fn invalid_active_color() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 x KQkq - 0 1"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_rank_count() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8 w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_invalid_char() {
        assert!(matches!(
            FenParser::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        // '0' and '9' are not valid empty-square counts.
        assert!(matches!(
            FenParser::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPP0PPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_wrong_file_count() {
        assert!(matches!(
            FenParser::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_castling_rights() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w XYZ - 0 1"),
            Err(FenError::InvalidCastlingRights(_))
        ));
    }

    #[test]
    fn castling_rights_must_be_ordered() {
        // "qK" has valid letters in the wrong relative order.
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w qK - 0 1"),
            Err(FenError::InvalidCastlingRights(_))
        ));
        // Repeats are rejected too.
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w KK - 0 1"),
            Err(FenError::InvalidCastlingRights(_))
        ));
        // Ordered subsets are fine.
        assert!(FenParser::parse("8/8/8/8/8/8/8/8 w Kq - 0 1").is_ok());
        assert!(FenParser::parse("8/8/8/8/8/8/8/8 w Qk - 0 1").is_ok());
    }

    #[test]
    fn invalid_en_passant() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - abc 0 1"),
            Err(FenError::InvalidEnPassantSquare(_))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - x3 0 1"),
            Err(FenError::InvalidEnPassantSquare(_))
        ));
        // Only ranks 3 and 6 can hold an en passant target.
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - e4 0 1"),
            Err(FenError::InvalidEnPassantSquare(_))
        ));
    }

    #[test]
    fn invalid_halfmove_clock() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - abc 1"),
            Err(FenError::InvalidHalfmoveClock(_))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - -1 1"),
            Err(FenError::InvalidHalfmoveClock(_))
        ));
    }

    #[test]
    fn invalid_fullmove_number() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - 0 xyz"),
            Err(FenError::InvalidFullmoveNumber(_))
        ));
        // Fullmove numbering starts at 1.
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - 0 0"),
            Err(FenError::InvalidFullmoveNumber(_))
        ));
    }

    #[test]
    fn fen_parser_default() {
        let fen = FenParser::default();
        assert_eq!(fen.active_color, 'w');
        assert_eq!(fen.castling, "KQkq");
        assert_eq!(fen.to_fen(), FenParser::STARTPOS);
    }

    #[test]
    fn fen_black_to_move() {
        let fen = FenParser::parse("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .unwrap();
        assert_eq!(fen.active_color, 'b');
        assert_eq!(fen.en_passant, "e3");
    }

    #[test]
    fn fen_no_castling() {
        let fen = FenParser::parse("8/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(fen.castling, "-");
    }

    #[test]
    fn fen_en_passant_rank_6() {
        let fen = FenParser::parse("8/8/8/8/8/8/8/8 b - d6 0 1").unwrap();
        assert_eq!(fen.en_passant, "d6");
    }
}
