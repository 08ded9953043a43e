use super::super::{Board, Color, Square};

impl Board {
    /// Forward pushes (single, or double from the start row through an empty
    /// square) plus diagonal captures. No en passant.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::with_capacity(4);
        let dir = color.pawn_direction();

        if let Some(one_step) = from.offset(dir, 0) {
            if self.is_empty(one_step) {
                moves.push(one_step);
                if from.row() == color.pawn_start_row() {
                    if let Some(two_step) = from.offset(2 * dir, 0) {
                        if self.is_empty(two_step) {
                            moves.push(two_step);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if self.color_on(target) == Some(color.opponent()) {
                    moves.push(target);
                }
            }
        }

        moves
    }
}
