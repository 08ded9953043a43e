//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use grand_chess::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, MoveError, Piece, PieceKind, Square, SquareError, COLS, ROWS,
};
