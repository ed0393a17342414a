//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - FEN parsing and serialization

mod color;
mod fen;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use piece::Piece;
pub use square::{File, OutOfBoard, Rank, Square, SquareNameError};
