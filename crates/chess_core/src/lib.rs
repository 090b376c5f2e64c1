// Board occupancy and per-piece move generation
pub mod board;
pub mod error;
pub mod moves;
pub mod piece;
pub mod square;

// Re-export main types for convenience
pub use board::Board;
pub use error::{ChessError, ChessResult};
pub use piece::{Piece, PieceId, PieceKind, Player};
pub use square::Square;
