//! Board representation and rules for the 15x20 variant.
//!
//! The board is a plain mailbox grid. Move generation works square by
//! square: pseudo-legal destinations come from piece movement alone, and
//! legal destinations are the ones that survive a simulated play on a
//! cloned board without leaving the mover's king attacked.
//!
//! # Example
//! ```
//! use grand_chess::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let pawn = Square::new(11, 0).unwrap();
//! assert_eq!(board.legal_moves(pawn).len(), 2);
//! assert!(!board.in_check(Color::White));
//! ```

mod builder;
mod check;
mod display;
mod error;
mod legal;
mod make_move;
mod movegen;
pub mod prelude;
mod setup;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError};
pub use setup::place_army;
pub use state::Board;
pub use types::{Color, Piece, PieceKind, Square, COLS, ROWS};
