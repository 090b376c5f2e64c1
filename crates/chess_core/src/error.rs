//! Error types for board and move queries.
//!
//! Every variant is a broken precondition on the caller's side; nothing here is
//! retried or corrected internally.

use thiserror::Error;

use crate::Piece;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Square coordinates outside the 8x8 grid
    #[error("square ({row}, {col}) is off the board (rows and columns must be 0-7)")]
    OutOfBounds { row: i8, col: i8 },

    /// Piece looked up on a board that does not hold it
    #[error("{piece} is not on the board")]
    PieceNotFound { piece: Piece },

    /// The same piece occupies more than one square
    #[error("{piece} occupies {count} squares, expected exactly one")]
    DuplicatePiece { piece: Piece, count: usize },
}

pub type ChessResult<T> = Result<T, ChessError>;
