use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use crate::{
    error::{ChessError, ChessResult},
    piece::{PieceKind, Player},
    Piece, Square,
};

/// Occupancy of the 8x8 grid: at most one piece per square.
///
/// Nothing here checks chess legality. `move_piece` relocates whatever it is
/// told to; move generation is advisory and lives in [`crate::moves`].
#[derive(Debug, Clone, Default)]
pub struct Board {
    pieces: HashMap<Square, Piece>,
    current_player: Player,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard opening position, White on rows 0 and 1.
    pub fn starting() -> Self {
        let mut board = Self::empty();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for square in Square::all() {
            let kind = match square.row() {
                1 | 6 => PieceKind::Pawn,
                0 | 7 => back_rank[square.col() as usize],
                _ => continue,
            };
            let player = if square.row() < 4 { Player::White } else { Player::Black };
            board.set_piece(square, Piece::new(kind, player));
        }

        board
    }

    /// Puts `piece` on `square`, replacing any occupant.
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.pieces.insert(square, piece);
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.pieces.remove(&square)
    }

    pub fn get_piece(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }

    /// The square holding `piece`, matched by identity rather than kind.
    pub fn find_piece(&self, piece: &Piece) -> ChessResult<Square> {
        let mut found = self
            .pieces
            .iter()
            .filter(|(_, occupant)| occupant.id() == piece.id())
            .map(|(square, _)| *square);

        match (found.next(), found.count()) {
            (None, _) => Err(ChessError::PieceNotFound { piece: *piece }),
            (Some(square), 0) => Ok(square),
            (Some(_), extra) => Err(ChessError::DuplicatePiece {
                piece: *piece,
                count: extra + 1,
            }),
        }
    }

    /// Moves whatever is on `from` to `to`, clearing `from` and overwriting
    /// `to`. An empty `from` therefore empties `to` as well.
    ///
    /// The turn passes to the opponent of the piece that moved.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        match self.pieces.remove(&from) {
            Some(piece) => {
                debug!("{} moves {} -> {}", piece, from, to);
                self.pieces.insert(to, piece);
                self.current_player = piece.player.opponent();
            }
            None => {
                warn!("move from empty square {} clears {}", from, to);
                self.pieces.remove(&to);
            }
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |square| self.get_piece(square).map(|piece| (square, piece)))
    }

    /// Available moves of whatever occupies `square`; empty if nothing does.
    pub fn available_moves_at(&self, square: Square) -> ChessResult<Vec<Square>> {
        match self.get_piece(square) {
            Some(piece) => piece.available_moves(self),
            None => Ok(Vec::new()),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let squares: Vec<Square> = Square::all().collect();
        for rank in squares.chunks(8).rev() {
            let line: String = rank
                .iter()
                .map(|square| self.get_piece(*square).map_or('.', Piece::symbol))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
