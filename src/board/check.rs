//! Check detection.

use super::{Board, Color, PieceKind, Square};

impl Board {
    /// Square holding the king of `color`, scanning in row-major order.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// True if any piece of `attacker` has a pseudo-legal move onto `square`.
    ///
    /// Only meaningful for an occupied target: pawn pushes onto an empty
    /// square would count, pawn diagonals onto it would not.
    fn is_occupant_attacked(&self, square: Square, attacker: Color) -> bool {
        self.pieces_of(attacker)
            .any(|(from, _)| self.pseudo_moves(from).contains(&square))
    }

    /// True if the king of `color` is attacked.
    ///
    /// A board without a king of that color is reported as not in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_occupant_attacked(king_sq, color.opponent()),
            None => {
                log::trace!("no {color} king on board, treating as not in check");
                false
            }
        }
    }
}
