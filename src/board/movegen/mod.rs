//! Pseudo-legal move generation.
//!
//! Destinations here respect piece movement and board occupancy but
//! ignore whether the mover's own king is left attacked. See
//! `Board::legal_moves` for the filtered version.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, PieceKind, Square};

impl Board {
    /// Pseudo-legal destinations for the piece on `from`.
    ///
    /// An empty square yields no destinations.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color),
            PieceKind::Bishop => self.generate_slider_moves(from, piece.color, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_moves(from, piece.color, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_moves(from, piece.color, SliderType::Queen),
            PieceKind::King => self.generate_king_moves(from, piece.color),
        }
    }

    /// True if a piece of `color` may land on `to`: empty or enemy-held.
    #[inline]
    fn can_land(&self, to: Square, color: Color) -> bool {
        self.color_on(to) != Some(color)
    }

    /// Push every in-bounds offset target that is empty or enemy-held.
    fn push_step_targets(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut Vec<Square>,
    ) {
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                if self.can_land(to, color) {
                    moves.push(to);
                }
            }
        }
    }
}
