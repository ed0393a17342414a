//! The move state machine: turn order, castling, en passant, promotion,
//! and move counters.

use crate::board::{Board, BoardFenError};
use crate::castling::CastlingAvailability;
use crate::validate;
use chess_core::{Color, FenError, FenParser, File, Piece, Square, SquareNameError};
use thiserror::Error;

/// Errors raised by [`Game::make_move`].
///
/// An ordinary move that is simply illegal is `Ok(false)`, not an error;
/// these variants cover malformed input and special moves whose intent was
/// unambiguous but whose execution is not permitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Square(#[from] SquareNameError),

    #[error("invalid castling move: {0}")]
    InvalidCastling(String),

    #[error("invalid promotion: {0}")]
    InvalidPromotion(String),
}

/// Errors raised when building a [`Game`] from a FEN string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameFenError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error(transparent)]
    Board(#[from] BoardFenError),
}

/// A chess game: a board plus the state that makes moves legal or not.
///
/// The game sequences legality checks, recognizes the special moves
/// (castling, en passant, promotion), and keeps the derived state - turn,
/// castling rights, en passant window, and move counters - consistent with
/// the board. There is no terminal state: check, checkmate, and stalemate
/// detection are out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    castling: CastlingAvailability,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Game {
    /// Creates a game in the standard starting position.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            castling: CastlingAvailability::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates a game from a full six-field FEN string.
    ///
    /// Never returns a partially built game: any malformed field fails the
    /// whole parse.
    pub fn from_fen(fen: &str) -> Result<Self, GameFenError> {
        let parsed = FenParser::parse(fen)?;

        let board = Board::from_fen(&parsed.piece_placement)?;

        let turn = match parsed.active_color {
            'w' => Color::White,
            'b' => Color::Black,
            _ => unreachable!("FEN parser validated this"),
        };

        let castling = CastlingAvailability::parse(&parsed.castling)
            .map_err(|e| FenError::InvalidCastlingRights(e.0))?;

        let en_passant = if parsed.en_passant == "-" {
            None
        } else {
            Square::from_algebraic(&parsed.en_passant)
        };

        Ok(Game {
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock: parsed.halfmove_clock,
            fullmove_number: parsed.fullmove_number,
        })
    }

    /// Serializes the game back to a full FEN string.
    pub fn to_fen(&self) -> String {
        let turn = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let en_passant = match self.en_passant {
            Some(sq) => sq.to_algebraic(),
            None => "-".to_string(),
        };
        format!(
            "{} {} {} {} {} {}",
            self.board.to_fen(),
            turn,
            self.castling,
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the castling rights.
    pub fn castling(&self) -> CastlingAvailability {
        self.castling
    }

    /// Returns the en passant target square, if the window is open.
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Returns the number of halfmoves since the last pawn move or capture.
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Returns the fullmove number (starts at 1, increments after Black).
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Attempts the move `from` -> `to`, given as square names.
    ///
    /// `promotion` is the piece letter for a pawn reaching the last rank;
    /// its case must match the mover (e.g. 'Q' for White, 'q' for Black).
    ///
    /// Returns `Ok(true)` and updates all game state when the move is
    /// legal; `Ok(false)` with no state change when the source square is
    /// empty, the piece is not the mover's, or no legality rule accepts the
    /// move. Malformed square names, illegal castling attempts, and illegal
    /// promotions are errors rather than `false` - see [`MoveError`].
    pub fn make_move(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<char>,
    ) -> Result<bool, MoveError> {
        let from = Square::parse(from)?;
        let to = Square::parse(to)?;

        let Some((piece, color)) = self.board.piece_at(from) else {
            return Ok(false);
        };
        if color != self.turn {
            return Ok(false);
        }

        if piece == Piece::King && self.is_castling_attempt(color, from, to) {
            self.castle(color, from, to)?;
            return Ok(true);
        }

        let en_passant_capture = self.is_en_passant_capture(piece, color, from, to);
        if !en_passant_capture && !validate::is_valid_move(&self.board, from, to) {
            return Ok(false);
        }

        // Promotion legality is checked before the board is touched, so a
        // failed promotion leaves the game entirely unchanged.
        let promoted = if piece == Piece::Pawn && to.rank().index() == color.promotion_rank() {
            Some(promotion_piece(promotion, color)?)
        } else {
            None
        };

        let captured = en_passant_capture || self.board.is_occupied(to);
        let next_en_passant = self.double_push_target(piece, color, from, to);

        self.board.move_piece(from, to);
        if en_passant_capture {
            // The captured pawn sits on the mover's origin rank and the
            // destination file, not on the destination square.
            self.board.clear(Square::new(to.file(), from.rank()));
        }
        if let Some(promoted) = promoted {
            self.board.put(to, promoted, color);
        }

        self.castling.update_after_regular_move(piece, color, from);
        self.en_passant = next_en_passant;
        if piece == Piece::Pawn || captured {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        self.end_turn();

        Ok(true)
    }

    /// A king on its back rank moving two or more files horizontally has
    /// unambiguously signaled castling intent.
    fn is_castling_attempt(&self, color: Color, from: Square, to: Square) -> bool {
        from.rank().index() == color.back_rank()
            && to.rank() == from.rank()
            && from.file().distance_to(to.file()) >= 2
    }

    /// Validates and executes a castling attempt. A recognized attempt
    /// either succeeds or errors; there is no `false` outcome.
    fn castle(&mut self, color: Color, from: Square, to: Square) -> Result<(), MoveError> {
        let kingside = match to.file() {
            File::G => true,
            File::C => false,
            _ => {
                return Err(MoveError::InvalidCastling(format!(
                    "invalid castling destination: {}",
                    to
                )))
            }
        };

        let allowed = if kingside {
            self.castling.can_castle_kingside(color)
        } else {
            self.castling.can_castle_queenside(color)
        };
        if !allowed {
            let side = if kingside { "kingside" } else { "queenside" };
            return Err(MoveError::InvalidCastling(format!(
                "{} has no {} castling right: availability is {}",
                color, side, self.castling
            )));
        }

        // Every square the king crosses or lands on must be empty.
        let step: i8 = if kingside { 1 } else { -1 };
        let mut file = from.file();
        loop {
            file = match file.offset(step) {
                Ok(next) => next,
                Err(_) => break,
            };
            let crossed = Square::new(file, from.rank());
            if self.board.is_occupied(crossed) {
                return Err(MoveError::InvalidCastling(format!(
                    "castling is blocked by a piece on {}",
                    crossed
                )));
            }
            if file == to.file() {
                break;
            }
        }
        // The rook passes through the b-file when castling queenside even
        // though the king does not.
        if !kingside {
            let b_file = Square::new(File::B, from.rank());
            if self.board.is_occupied(b_file) {
                return Err(MoveError::InvalidCastling(format!(
                    "castling is blocked by a piece on {}",
                    b_file
                )));
            }
        }

        self.board.move_piece(from, to);
        let (rook_from, rook_to) = if kingside {
            (
                Square::new(File::H, from.rank()),
                Square::new(File::F, from.rank()),
            )
        } else {
            (
                Square::new(File::A, from.rank()),
                Square::new(File::D, from.rank()),
            )
        };
        self.board.move_piece(rook_from, rook_to);

        self.castling.update_after_castling_move(color);
        self.en_passant = None;
        self.halfmove_clock += 1;
        self.end_turn();

        Ok(())
    }

    /// A pawn stepping diagonally onto the open en passant target.
    fn is_en_passant_capture(&self, piece: Piece, color: Color, from: Square, to: Square) -> bool {
        let Some(target) = self.en_passant else {
            return false;
        };
        piece == Piece::Pawn
            && to == target
            && from.file().distance_to(to.file()) == 1
            && from.rank().offset(color.pawn_direction()) == Ok(to.rank())
    }

    /// The square a pawn skips on a two-square advance, opening the en
    /// passant window for exactly one reply. Any other move closes it.
    fn double_push_target(
        &self,
        piece: Piece,
        color: Color,
        from: Square,
        to: Square,
    ) -> Option<Square> {
        if piece != Piece::Pawn || from.rank().distance_to(to.rank()) != 2 {
            return None;
        }
        // A legal two-rank pawn move is always a straight push from the
        // home rank, so the skipped square exists.
        from.offset(0, color.pawn_direction()).ok()
    }

    fn end_turn(&mut self) {
        if self.turn == Color::Black {
            self.fullmove_number += 1;
        }
        self.turn = self.turn.opposite();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn promotion_piece(promotion: Option<char>, color: Color) -> Result<Piece, MoveError> {
    match promotion {
        Some(c) => Piece::from_promotion_char(c, color).ok_or_else(|| {
            MoveError::InvalidPromotion(format!(
                "'{}' is not a valid {} promotion piece",
                c, color
            ))
        }),
        None => Err(MoveError::InvalidPromotion(format!(
            "a {} pawn reaching the last rank requires a promotion piece",
            color
        ))),
    }
}
