//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - mailbox board representation with FEN board-fragment parsing
//! - [`CastlingAvailability`] - the four castling rights and their revocation rules
//! - [`Game`] - the move state machine: turn, en passant, counters, castling,
//!   and promotion
//! - Per-piece move legality predicates in [`validate`]
//!
//! # Architecture
//!
//! The board is a flat array of 64 optional pieces indexed by square. Moves
//! are requested as square names; the game classifies each request as an
//! ordinary move, an en passant capture, or a castling attempt, asks the
//! moving piece's legality predicate where applicable, then mutates the
//! board and its own bookkeeping in one step. The board itself performs no
//! legality checks.
//!
//! Check, checkmate, and stalemate detection are deliberately out of scope,
//! as are search and evaluation.
//!
//! # Example
//!
//! ```
//! use chess_rules::Game;
//!
//! let mut game = Game::new();
//! assert!(game.make_move("e2", "e4", None).unwrap());
//! assert_eq!(
//!     game.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//!
//! // An illegal move is an ordinary `false`, not an error.
//! assert!(!game.make_move("e7", "e4", None).unwrap());
//! ```

mod board;
mod castling;
mod game;
pub mod validate;

pub use board::{Board, BoardFenError};
pub use castling::{CastlingAvailability, CastlingParseError};
pub use game::{Game, GameFenError, MoveError};
