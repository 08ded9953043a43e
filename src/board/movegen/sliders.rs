use super::super::{Board, Color, Square};

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &ALL_DIRECTIONS,
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(dr, dc) in slider.directions() {
            self.slide(from, color, dr, dc, &mut moves);
        }
        moves
    }

    /// Walk one ray until the edge or the first occupied square, which is
    /// kept only when it holds an enemy piece.
    fn slide(&self, from: Square, color: Color, dr: isize, dc: isize, moves: &mut Vec<Square>) {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            match self.color_on(to) {
                None => moves.push(to),
                Some(occupant) => {
                    if occupant != color {
                        moves.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
