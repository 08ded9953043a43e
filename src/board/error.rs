//! Error types for board operations.

use std::fmt;

use super::Square;

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Coordinates outside the 15x20 board
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(
                    f,
                    "Square ({row}, {col}) out of bounds (rows 0-{}, cols 0-{})",
                    super::ROWS - 1,
                    super::COLS - 1
                )
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move application failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Source coordinates are not on the board
    InvalidSquare(SquareError),
    /// No piece stands on the source square
    EmptySource { square: Square },
    /// Target is not among the legal moves of the source piece
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSquare(err) => write!(f, "Invalid square: {err}"),
            MoveError::EmptySource { square } => {
                write!(f, "No piece on source square {square}")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from} -> {to}")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::InvalidSquare(err)
    }
}
