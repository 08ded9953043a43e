//! Core board types.
//!
//! - `Piece`, `PieceKind` and `Color` - pieces and sides
//! - `Square` - an always-valid (row, col) coordinate on the 15x20 board

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, COLS, ROWS};
