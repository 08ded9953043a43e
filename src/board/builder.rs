//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece on top of an empty board or
//! the initial setup.
//!
//! # Example
//! ```
//! use grand_chess::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(14, 10).unwrap(), Color::White, PieceKind::King)
//!     .piece(Square::new(0, 10).unwrap(), Color::Black, PieceKind::King)
//!     .piece(Square::new(11, 0).unwrap(), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, Color, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder { board: Board::new() }
    }

    /// Place a piece on the board, replacing any existing one.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set_piece(square, color, kind);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear_square(square);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
