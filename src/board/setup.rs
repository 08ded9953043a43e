//! Initial army placement.
//!
//! Each side fills four ranks counted inward from its own edge: a full
//! back rank, two sparse support ranks and a full pawn rank. Black's
//! placement is White's mirrored across the horizontal midline.

use once_cell::sync::Lazy;

use super::{Board, Color, PieceKind, Square, COLS};

use PieceKind::{Bishop, King, Knight, Queen, Rook};

/// Edge-most rank, one kind per column. King on column 10.
const BACK_RANK: [PieceKind; COLS] = [
    Rook, Bishop, Queen, Bishop, Rook, Knight, Bishop, Rook, Queen, Knight, King, Bishop, Queen,
    Rook, Bishop, Knight, Rook, Bishop, Queen, Rook,
];

const SECOND_RANK: [(usize, PieceKind); 10] = [
    (2, Rook),
    (4, Bishop),
    (6, Queen),
    (8, Rook),
    (10, Bishop),
    (11, Rook),
    (13, Queen),
    (15, Rook),
    (17, Bishop),
    (19, Queen),
];

const THIRD_RANK: [(usize, PieceKind); 5] =
    [(5, Rook), (9, Queen), (10, Rook), (14, Bishop), (18, Queen)];

pub(crate) static INITIAL_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for color in Color::BOTH {
        place_army(&mut board, color);
    }
    board
});

fn rank_square(color: Color, steps: usize, col: usize) -> Square {
    match Square::new(color.rank_row(steps), col) {
        Some(sq) => sq,
        None => unreachable!("setup ranks lie on the board"),
    }
}

/// Write one side's army onto `board`.
///
/// Meant for a freshly emptied board; squares already holding pieces are
/// overwritten without complaint.
pub fn place_army(board: &mut Board, color: Color) {
    for (col, &kind) in BACK_RANK.iter().enumerate() {
        board.set_piece(rank_square(color, 0, col), color, kind);
    }
    for &(col, kind) in &SECOND_RANK {
        board.set_piece(rank_square(color, 1, col), color, kind);
    }
    for &(col, kind) in &THIRD_RANK {
        board.set_piece(rank_square(color, 2, col), color, kind);
    }
    for col in 0..COLS {
        board.set_piece(rank_square(color, 3, col), color, PieceKind::Pawn);
    }
}
