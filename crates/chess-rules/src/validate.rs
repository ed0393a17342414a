//! Per-piece move legality predicates.
//!
//! [`is_valid_move`] is a pure predicate over (board, from, to): it answers
//! whether the piece on `from` may move to `to` by its own movement
//! geometry and obstruction rules. It knows nothing about turn order,
//! castling, en passant, or check - those live one layer up, in the game.

use crate::Board;
use chess_core::{Color, Piece, Square};

/// Returns true if the piece on `from` may move to `to`.
///
/// Returns false (never an error) when `from` is empty, `from == to`, or
/// `to` holds a piece of the mover's own color; otherwise dispatches to the
/// moving piece's geometry.
pub fn is_valid_move(board: &Board, from: Square, to: Square) -> bool {
    let Some((piece, color)) = board.piece_at(from) else {
        return false;
    };
    if from == to {
        return false;
    }
    if let Some((_, occupant_color)) = board.piece_at(to) {
        if occupant_color == color {
            return false;
        }
    }

    match piece {
        Piece::Pawn => pawn_move(board, color, from, to),
        Piece::Knight => knight_move(from, to),
        Piece::Bishop => bishop_move(board, from, to),
        Piece::Rook => rook_move(board, from, to),
        // A queen moves like a bishop or a rook, nothing more.
        Piece::Queen => bishop_move(board, from, to) || rook_move(board, from, to),
        Piece::King => king_move(from, to),
    }
}

/// One square straight ahead onto emptiness, two from the home rank with a
/// clear path, or one square diagonally forward onto an enemy piece.
/// En passant is deliberately not handled here.
fn pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let direction = color.pawn_direction();
    let Ok(one_ahead) = from.rank().offset(direction) else {
        // A pawn on the last rank has promoted; nothing moves from there.
        return false;
    };

    if from.file() == to.file() {
        if to.rank() == one_ahead {
            return !board.is_occupied(to);
        }
        if from.rank().index() == color.home_rank() {
            if let Ok(two_ahead) = from.rank().offset(2 * direction) {
                if to.rank() == two_ahead {
                    let intermediate = Square::new(from.file(), one_ahead);
                    return !board.is_occupied(intermediate) && !board.is_occupied(to);
                }
            }
        }
        return false;
    }

    // Diagonal step: a capture, and only a capture. The same-color case was
    // already rejected by the shared precondition.
    from.file().distance_to(to.file()) == 1 && to.rank() == one_ahead && board.is_occupied(to)
}

/// The L-shape: |dfile| * |drank| == 2. Knights jump, so no obstruction check.
fn knight_move(from: Square, to: Square) -> bool {
    from.file().distance_to(to.file()) * from.rank().distance_to(to.rank()) == 2
}

/// Strictly diagonal with an empty path between.
fn bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let file_distance = from.file().distance_to(to.file());
    if file_distance != from.rank().distance_to(to.rank()) || file_distance == 0 {
        return false;
    }
    path_is_clear(board, from, to)
}

/// Strictly horizontal or vertical with an empty path between.
fn rook_move(board: &Board, from: Square, to: Square) -> bool {
    if from.file() != to.file() && from.rank() != to.rank() {
        return false;
    }
    path_is_clear(board, from, to)
}

/// One square in any of the eight directions.
fn king_move(from: Square, to: Square) -> bool {
    from.file().distance_to(to.file()) <= 1 && from.rank().distance_to(to.rank()) <= 1
}

/// Walks from `from` towards `to` one step at a time and checks that every
/// square strictly between them is empty. Callers guarantee the two squares
/// are aligned on a file, rank, or diagonal.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let file_step = (to.file().index() as i8 - from.file().index() as i8).signum();
    let rank_step = (to.rank().index() as i8 - from.rank().index() as i8).signum();

    let mut sq = from;
    loop {
        sq = match sq.offset(file_step, rank_step) {
            Ok(next) => next,
            Err(_) => return false,
        };
        if sq == to {
            return true;
        }
        if board.is_occupied(sq) {
            return false;
        }
    }
}
