//! Legal move filtering.
//!
//! A pseudo-legal move is kept only if, played out on a cloned board with
//! promotion applied, it leaves the mover's king unattacked. The board the
//! query runs against is never touched.

use super::{Board, Color, Square, SquareError};

impl Board {
    /// Legal destinations for the piece on `from`.
    ///
    /// An empty square yields no destinations.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut moves = self.pseudo_moves(from);
        moves.retain(|&to| {
            let mut speculative = self.clone();
            speculative.apply_unchecked(from, to);
            let safe = !speculative.in_check(piece.color);
            if !safe {
                log::trace!("{from} -> {to} leaves {} king in check", piece.color);
            }
            safe
        });
        moves
    }

    /// Legal destinations for raw (row, col) coordinates.
    ///
    /// # Errors
    /// Returns `SquareError::OutOfBounds` if the coordinates are off the board.
    pub fn legal_moves_at(&self, row: usize, col: usize) -> Result<Vec<Square>, SquareError> {
        let from = Square::try_from((row, col))?;
        Ok(self.legal_moves(from))
    }

    /// Every legal (from, to) pair for the pieces of `color`.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<(Square, Square)> {
        self.pieces_of(color)
            .flat_map(|(from, _)| self.legal_moves(from).into_iter().map(move |to| (from, to)))
            .collect()
    }
}
