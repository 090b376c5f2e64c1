use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::Serialize;

use crate::{error::ChessResult, moves, Board, Square};

static NEXT_PIECE_ID: AtomicU32 = AtomicU32::new(0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[default]
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// FEN letter for a White piece.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// Identity of a piece; copies of a piece share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(u32);

/// A chess piece. It does not know its own square: the board is asked every
/// time, so a piece can never hold a stale position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    #[serde(skip)]
    id: PieceId,
    #[serde(rename = "piece")]
    pub kind: PieceKind,
    pub player: Player,
}

impl Piece {
    pub fn new(kind: PieceKind, player: Player) -> Self {
        Self {
            id: PieceId(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed)),
            kind,
            player,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn is_hostile_to(&self, other: &Piece) -> bool {
        self.player != other.player
    }

    /// Squares this piece may move to on `board`, ignoring king safety.
    ///
    /// Fails if the piece is not on the board exactly once, or (for a pawn on
    /// the far edge) if the forward square falls off the board.
    pub fn available_moves(&self, board: &Board) -> ChessResult<Vec<Square>> {
        moves::available_moves(self, board)
    }

    /// Moves this piece to `target` without checking it against
    /// [`Piece::available_moves`]; validation is up to the caller.
    pub fn move_to(&self, board: &mut Board, target: Square) -> ChessResult<()> {
        let current = board.find_piece(self)?;
        board.move_piece(current, target);
        Ok(())
    }

    /// `{"piece": "Pawn", "player": "white"}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }

    /// FEN letter: upper case for White, lower case for Black.
    pub fn symbol(&self) -> char {
        match self.player {
            Player::White => self.kind.letter(),
            Player::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} #{}", self.player, self.kind, self.id.0)
    }
}
