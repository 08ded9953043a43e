use super::super::{Board, Color, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::with_capacity(KING_OFFSETS.len());
        self.push_step_targets(from, color, &KING_OFFSETS, &mut moves);
        moves
    }
}
