#![allow(dead_code)]

use std::collections::HashSet;

use chess_core::{Board, Piece, PieceKind, Player, Square};

pub fn sq(row: i8, col: i8) -> Square {
    Square::at(row, col).unwrap()
}

/// Empty board with a single piece on `square`.
pub fn lone(kind: PieceKind, player: Player, square: Square) -> (Board, Piece) {
    let mut board = Board::empty();
    let piece = Piece::new(kind, player);
    board.set_piece(square, piece);
    (board, piece)
}

pub fn square_set(squares: &[(i8, i8)]) -> HashSet<Square> {
    squares.iter().map(|&(r, c)| sq(r, c)).collect()
}

pub fn move_set(piece: &Piece, board: &Board) -> HashSet<Square> {
    piece.available_moves(board).unwrap().into_iter().collect()
}
