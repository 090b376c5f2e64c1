//! Geometric move generation, one rule per piece family.
//!
//! Check, castling, en passant and promotion are not modelled. Every query
//! starts by locating the piece on the board.

use log::debug;

use crate::{
    error::ChessResult,
    piece::{PieceKind, Player},
    square::BOARD_SIZE,
    Board, Piece, Square,
};

/// (row, col) displacement
pub type Offset = (i8, i8);

#[rustfmt::skip]
pub const KNIGHT_JUMPS: [Offset; 8] = [
    (-2, -1), (-2, 1),
    (-1, -2), (-1, 2),
    (1, -2), (1, 2),
    (2, -1), (2, 1),
];

#[rustfmt::skip]
pub const KING_STEPS: [Offset; 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

pub const DIAGONALS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ORTHOGONALS: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[rustfmt::skip]
pub const ALL_DIRECTIONS: [Offset; 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];

pub fn available_moves(piece: &Piece, board: &Board) -> ChessResult<Vec<Square>> {
    let from = board.find_piece(piece)?;

    let moves = match piece.kind {
        PieceKind::Pawn => pawn_moves(piece.player, from, board)?,
        PieceKind::Knight => step_moves(piece.player, from, &KNIGHT_JUMPS, board),
        PieceKind::Bishop => slide_moves(piece.player, from, &DIAGONALS, board),
        PieceKind::Rook => slide_moves(piece.player, from, &ORTHOGONALS, board),
        PieceKind::Queen => slide_moves(piece.player, from, &ALL_DIRECTIONS, board),
        PieceKind::King => step_moves(piece.player, from, &KING_STEPS, board),
    };

    debug!("{} on {} has {} moves", piece, from, moves.len());
    Ok(moves)
}

/// Empty, or held by the other side.
fn can_land_on(player: Player, target: Square, board: &Board) -> bool {
    match board.get_piece(target) {
        Some(occupant) => occupant.player != player,
        None => true,
    }
}

/// One hop per offset; off-board and friendly-occupied targets are dropped.
pub(crate) fn step_moves(
    player: Player,
    from: Square,
    offsets: &[Offset],
    board: &Board,
) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&target| can_land_on(player, target, board))
        .collect()
}

/// Walks each direction nearest-first until the edge or the first occupant,
/// which is included only when hostile. A ray is at most seven squares long.
pub(crate) fn slide_moves(
    player: Player,
    from: Square,
    directions: &[Offset],
    board: &Board,
) -> Vec<Square> {
    let mut moves = Vec::new();

    for &(d_row, d_col) in directions {
        if (d_row, d_col) == (0, 0) {
            continue;
        }

        let mut current = from;
        for _ in 1..BOARD_SIZE {
            let Some(next) = current.offset(d_row, d_col) else {
                break;
            };
            match board.get_piece(next) {
                None => moves.push(next),
                Some(occupant) => {
                    if occupant.player != player {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    moves
}

/// Row a pawn advances along, and the row it may double-step from.
fn pawn_direction(player: Player) -> (i8, i8) {
    match player {
        Player::White => (1, 1),
        Player::Black => (-1, 6),
    }
}

/// Forward pushes only; pawns do not capture here.
///
/// The double step is offered from the nominal start row whatever the pawn's
/// history. No edge check is made: a pawn on the far row yields `OutOfBounds`.
pub(crate) fn pawn_moves(player: Player, from: Square, board: &Board) -> ChessResult<Vec<Square>> {
    let (direction, starting_row) = pawn_direction(player);
    let mut moves = Vec::new();

    let one_forward = Square::at(from.row() + direction, from.col())?;
    if board.get_piece(one_forward).is_none() {
        moves.push(one_forward);

        if from.row() == starting_row {
            let two_forward = Square::at(from.row() + 2 * direction, from.col())?;
            if board.get_piece(two_forward).is_none() {
                moves.push(two_forward);
            }
        }
    }

    Ok(moves)
}
