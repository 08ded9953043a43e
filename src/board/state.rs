#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square, COLS, ROWS};

/// The 15x20 board.
///
/// A plain owned value: cloning yields a fully independent copy, which is
/// what every speculative evaluation works on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; COLS]; ROWS],
}

impl Board {
    /// Board in the initial position with both armies placed.
    #[must_use]
    pub fn new() -> Self {
        (*super::setup::INITIAL_BOARD).clone()
    }

    /// Board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; COLS]; ROWS],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    /// Place a piece, replacing whatever stood there.
    pub fn set_piece(&mut self, sq: Square, color: Color, kind: PieceKind) {
        self.squares[sq.row()][sq.col()] = Some(Piece::new(color, kind));
    }

    /// Empty a square, returning the piece that was on it.
    pub fn clear_square(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()].take()
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Swap colors and flip rows (row <-> 14 - row).
    ///
    /// The initial position is a fixed point of this transformation.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut mirrored = Board::empty();
        for (sq, piece) in self.pieces() {
            mirrored.set_piece(sq.mirror(), piece.color.opponent(), piece.kind);
        }
        mirrored
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
