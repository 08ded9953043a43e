//! Pseudo-legal move generation tests.

use super::{sorted, sq};
use crate::board::{Board, BoardBuilder, Color, PieceKind};

fn lone(row: usize, col: usize, color: Color, kind: PieceKind) -> Board {
    BoardBuilder::new().piece(sq(row, col), color, kind).build()
}

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::new();
    assert!(board.pseudo_moves(sq(7, 7)).is_empty());
    assert!(Board::empty().pseudo_moves(sq(0, 0)).is_empty());
}

#[test]
fn test_rook_on_open_board() {
    let board = lone(7, 10, Color::White, PieceKind::Rook);
    let moves = board.pseudo_moves(sq(7, 10));
    // 14 along the column plus 19 along the row
    assert_eq!(moves.len(), 33);
    assert!(moves.iter().all(|m| m.row() == 7 || m.col() == 10));
}

#[test]
fn test_bishop_on_open_board() {
    let board = lone(7, 10, Color::Black, PieceKind::Bishop);
    let moves = board.pseudo_moves(sq(7, 10));
    assert_eq!(moves.len(), 28);
    assert!(moves
        .iter()
        .all(|m| m.row().abs_diff(7) == m.col().abs_diff(10)));
}

#[test]
fn test_queen_on_open_board() {
    let board = lone(7, 10, Color::White, PieceKind::Queen);
    assert_eq!(board.pseudo_moves(sq(7, 10)).len(), 61);
}

#[test]
fn test_slider_stops_at_first_blocker() {
    let board = BoardBuilder::new()
        .piece(sq(7, 10), Color::White, PieceKind::Rook)
        .piece(sq(7, 13), Color::White, PieceKind::Pawn)
        .piece(sq(4, 10), Color::Black, PieceKind::Knight)
        .build();
    let moves = board.pseudo_moves(sq(7, 10));

    assert!(moves.contains(&sq(7, 12)));
    assert!(!moves.contains(&sq(7, 13)), "own piece is not a target");
    assert!(!moves.contains(&sq(7, 14)), "ray continues past own piece");
    assert!(moves.contains(&sq(4, 10)), "enemy blocker is a capture");
    assert!(!moves.contains(&sq(3, 10)), "ray continues past capture");
    // right 2, up 3, down 7, left 10
    assert_eq!(moves.len(), 22);
}

#[test]
fn test_initial_sliders_boxed_in() {
    let board = Board::new();
    // Rook in the corner: (13, 0) and (12, 0) are open, (14, 1) is own bishop.
    assert_eq!(
        sorted(board.pseudo_moves(sq(14, 0))),
        vec![sq(12, 0), sq(13, 0)]
    );
}

#[test]
fn test_knight_corner_and_center() {
    let corner = lone(0, 0, Color::White, PieceKind::Knight);
    assert_eq!(
        sorted(corner.pseudo_moves(sq(0, 0))),
        vec![sq(1, 2), sq(2, 1)]
    );

    let center = lone(7, 10, Color::White, PieceKind::Knight);
    assert_eq!(center.pseudo_moves(sq(7, 10)).len(), 8);
}

#[test]
fn test_knight_jumps_over_pieces() {
    let board = Board::new();
    assert_eq!(
        sorted(board.pseudo_moves(sq(14, 9))),
        vec![sq(12, 8), sq(13, 7)]
    );
}

#[test]
fn test_knight_captures_but_not_own() {
    let board = BoardBuilder::new()
        .piece(sq(7, 10), Color::White, PieceKind::Knight)
        .piece(sq(5, 9), Color::Black, PieceKind::Rook)
        .piece(sq(5, 11), Color::White, PieceKind::Rook)
        .build();
    let moves = board.pseudo_moves(sq(7, 10));
    assert!(moves.contains(&sq(5, 9)));
    assert!(!moves.contains(&sq(5, 11)));
    assert_eq!(moves.len(), 7);
}

#[test]
fn test_king_corner_and_center() {
    let corner = lone(14, 19, Color::White, PieceKind::King);
    assert_eq!(
        sorted(corner.pseudo_moves(sq(14, 19))),
        vec![sq(13, 18), sq(13, 19), sq(14, 18)]
    );

    let center = lone(7, 7, Color::Black, PieceKind::King);
    assert_eq!(center.pseudo_moves(sq(7, 7)).len(), 8);
}

#[test]
fn test_pawn_double_push_from_start() {
    let board = lone(11, 5, Color::White, PieceKind::Pawn);
    assert_eq!(board.pseudo_moves(sq(11, 5)), vec![sq(10, 5), sq(9, 5)]);

    let board = lone(3, 5, Color::Black, PieceKind::Pawn);
    assert_eq!(board.pseudo_moves(sq(3, 5)), vec![sq(4, 5), sq(5, 5)]);
}

#[test]
fn test_pawn_single_push_off_start() {
    let board = lone(8, 5, Color::White, PieceKind::Pawn);
    assert_eq!(board.pseudo_moves(sq(8, 5)), vec![sq(7, 5)]);

    let board = lone(6, 5, Color::Black, PieceKind::Pawn);
    assert_eq!(board.pseudo_moves(sq(6, 5)), vec![sq(7, 5)]);
}

#[test]
fn test_pawn_blocked() {
    let blocked = BoardBuilder::new()
        .piece(sq(11, 5), Color::White, PieceKind::Pawn)
        .piece(sq(10, 5), Color::Black, PieceKind::Rook)
        .build();
    assert!(blocked.pseudo_moves(sq(11, 5)).is_empty());

    let far_blocked = BoardBuilder::new()
        .piece(sq(11, 5), Color::White, PieceKind::Pawn)
        .piece(sq(9, 5), Color::White, PieceKind::Rook)
        .build();
    assert_eq!(far_blocked.pseudo_moves(sq(11, 5)), vec![sq(10, 5)]);
}

#[test]
fn test_pawn_diagonal_captures() {
    let board = BoardBuilder::new()
        .piece(sq(11, 5), Color::White, PieceKind::Pawn)
        .piece(sq(10, 4), Color::Black, PieceKind::Knight)
        .piece(sq(10, 6), Color::White, PieceKind::Knight)
        .build();
    assert_eq!(
        sorted(board.pseudo_moves(sq(11, 5))),
        vec![sq(9, 5), sq(10, 4), sq(10, 5)]
    );
}

#[test]
fn test_pawn_never_moves_diagonally_to_empty() {
    let board = lone(8, 0, Color::Black, PieceKind::Pawn);
    assert_eq!(board.pseudo_moves(sq(8, 0)), vec![sq(9, 0)]);
}

#[test]
fn test_pawn_on_far_edge_has_no_moves() {
    let board = lone(0, 3, Color::White, PieceKind::Pawn);
    assert!(board.pseudo_moves(sq(0, 3)).is_empty());
}

#[test]
fn test_initial_pawn_moves() {
    let board = Board::new();
    for col in [0, 7, 19] {
        assert_eq!(
            board.pseudo_moves(sq(11, col)),
            vec![sq(10, col), sq(9, col)]
        );
        assert_eq!(board.pseudo_moves(sq(3, col)), vec![sq(4, col), sq(5, col)]);
    }
}
