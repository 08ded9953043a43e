//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Initial army placement and board copies
//! - `movegen.rs` - Pseudo-legal moves per piece kind
//! - `check.rs` - King lookup and check detection
//! - `legal.rs` - Legal move filtering
//! - `promotion.rs` - Promotion and move application
//! - `proptest.rs` - Property-based tests

mod movegen;

use crate::board::Square;

pub(super) fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).expect("test square on board")
}

pub(super) fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort();
    squares
}
