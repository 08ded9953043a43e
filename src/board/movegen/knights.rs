use super::super::{Board, Color, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::with_capacity(KNIGHT_OFFSETS.len());
        self.push_step_targets(from, color, &KNIGHT_OFFSETS, &mut moves);
        moves
    }
}
