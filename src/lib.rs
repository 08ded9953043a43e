pub mod board;
pub mod sync;

pub use board::{Board, Color, MoveError, Piece, PieceKind, Square, SquareError};
pub use sync::SharedBoard;
