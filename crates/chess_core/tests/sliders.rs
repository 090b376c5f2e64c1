mod common;

use chess_core::{Piece, PieceKind, Player};
use common::{lone, move_set, sq, square_set};

#[test]
fn bishop_moves_diagonally_from_centre() {
    let (board, bishop) = lone(PieceKind::Bishop, Player::White, sq(4, 4));

    let moves = move_set(&bishop, &board);

    assert_eq!(
        moves,
        square_set(&[
            (3, 3), (2, 2), (1, 1), (0, 0),
            (3, 5), (2, 6), (1, 7),
            (5, 3), (6, 2), (7, 1),
            (5, 5), (6, 6), (7, 7),
        ])
    );
}

#[test]
fn bishop_blocked_by_friendly_piece() {
    let (mut board, bishop) = lone(PieceKind::Bishop, Player::White, sq(4, 4));
    board.set_piece(sq(6, 6), Piece::new(PieceKind::Pawn, Player::White));

    let moves = move_set(&bishop, &board);

    assert!(moves.contains(&sq(5, 5)));
    assert!(!moves.contains(&sq(6, 6)));
    assert!(!moves.contains(&sq(7, 7)));
}

#[test]
fn bishop_can_capture_enemy_but_not_move_past() {
    let (mut board, bishop) = lone(PieceKind::Bishop, Player::White, sq(4, 4));
    board.set_piece(sq(6, 6), Piece::new(PieceKind::Pawn, Player::Black));

    let moves = move_set(&bishop, &board);

    assert!(moves.contains(&sq(6, 6)));
    assert!(!moves.contains(&sq(7, 7)));
}

#[test]
fn rook_moves_straight_lines_from_centre() {
    let (board, rook) = lone(PieceKind::Rook, Player::White, sq(4, 4));

    let moves = move_set(&rook, &board);

    let expected: Vec<(i8, i8)> = (0..8)
        .filter(|&i| i != 4)
        .flat_map(|i| [(i, 4), (4, i)])
        .collect();
    assert_eq!(moves, square_set(&expected));
}

#[test]
fn rook_blocked_by_friendly_piece() {
    let (mut board, rook) = lone(PieceKind::Rook, Player::White, sq(4, 4));
    board.set_piece(sq(4, 6), Piece::new(PieceKind::Pawn, Player::White));

    let moves = move_set(&rook, &board);

    assert!(!moves.contains(&sq(4, 6)));
    assert!(!moves.contains(&sq(4, 7)));
}

#[test]
fn rook_can_capture_enemy_but_not_move_past() {
    let (mut board, rook) = lone(PieceKind::Rook, Player::White, sq(4, 4));
    board.set_piece(sq(4, 6), Piece::new(PieceKind::Pawn, Player::Black));

    let moves = move_set(&rook, &board);

    assert!(moves.contains(&sq(4, 6)));
    assert!(!moves.contains(&sq(4, 7)));
}

#[test]
fn queen_moves_like_rook_and_bishop() {
    let (board, queen) = lone(PieceKind::Queen, Player::White, sq(4, 4));
    let (rook_board, rook) = lone(PieceKind::Rook, Player::White, sq(4, 4));
    let (bishop_board, bishop) = lone(PieceKind::Bishop, Player::White, sq(4, 4));

    let moves = move_set(&queen, &board);

    let union: std::collections::HashSet<_> = move_set(&rook, &rook_board)
        .union(&move_set(&bishop, &bishop_board))
        .copied()
        .collect();
    assert_eq!(moves, union);
    assert_eq!(moves.len(), 27);
}

#[test]
fn queen_blocked_by_friendly_piece() {
    let (mut board, queen) = lone(PieceKind::Queen, Player::Black, sq(4, 4));
    board.set_piece(sq(4, 6), Piece::new(PieceKind::Pawn, Player::Black));

    let moves = move_set(&queen, &board);

    assert!(moves.contains(&sq(4, 5)));
    assert!(!moves.contains(&sq(4, 6)));
    assert!(!moves.contains(&sq(4, 7)));
}

#[test]
fn queen_can_capture_enemy_but_not_move_past() {
    let (mut board, queen) = lone(PieceKind::Queen, Player::White, sq(4, 4));
    board.set_piece(sq(6, 6), Piece::new(PieceKind::Pawn, Player::Black));

    let moves = move_set(&queen, &board);

    assert!(moves.contains(&sq(6, 6)));
    assert!(!moves.contains(&sq(7, 7)));
}

#[test]
fn pieces_are_boxed_in_on_the_starting_board() {
    let board = chess_core::Board::starting();

    for col in [0, 2, 3, 5, 7] {
        assert_eq!(board.available_moves_at(sq(0, col)), Ok(Vec::new()));
        assert_eq!(board.available_moves_at(sq(7, col)), Ok(Vec::new()));
    }
}
