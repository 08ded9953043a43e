//! Move application and promotion.

use super::{Board, MoveError, Piece, PieceKind, Square};

impl Board {
    /// Promote a pawn on `square` to a queen if it stands on its color's
    /// promotion row. Returns true if a promotion happened.
    ///
    /// Anything other than a pawn is left alone, so calling this twice is
    /// harmless.
    pub fn maybe_promote(&mut self, square: Square) -> bool {
        match &mut self.squares[square.row()][square.col()] {
            Some(piece)
                if piece.kind == PieceKind::Pawn && square.row() == piece.color.promotion_row() =>
            {
                piece.kind = PieceKind::Queen;
                log::debug!("{} pawn promoted to queen on {square}", piece.color);
                true
            }
            _ => false,
        }
    }

    /// Move whatever stands on `from` to `to`, vacate `from` and promote.
    /// Returns the captured piece, if any.
    pub(crate) fn apply_unchecked(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.clear_square(from);
        let captured = std::mem::replace(&mut self.squares[to.row()][to.col()], moving);
        self.maybe_promote(to);
        captured
    }

    /// Play `from -> to` on this board, then apply promotion on `to`.
    ///
    /// Legality is NOT re-checked: callers are expected to have taken `to`
    /// from `legal_moves(from)`. Use [`Board::play_move`] for a validated
    /// variant. Returns the captured piece, if any.
    ///
    /// # Errors
    /// Returns `MoveError::EmptySource` if no piece stands on `from`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        if self.is_empty(from) {
            return Err(MoveError::EmptySource { square: from });
        }
        let captured = self.apply_unchecked(from, to);
        log::debug!("applied {from} -> {to}, captured {captured:?}");
        Ok(captured)
    }

    /// Like [`Board::apply_move`], but first checks that `to` is a legal
    /// destination for the piece on `from`.
    ///
    /// # Errors
    /// Returns `MoveError::EmptySource` for an empty source square and
    /// `MoveError::IllegalMove` if `to` is not a legal destination.
    pub fn play_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        if self.is_empty(from) {
            return Err(MoveError::EmptySource { square: from });
        }
        if !self.legal_moves(from).contains(&to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        self.apply_move(from, to)
    }

    /// [`Board::play_move`] for raw (row, col) coordinates.
    ///
    /// # Errors
    /// Returns `MoveError::InvalidSquare` if either square is off the board,
    /// otherwise the same errors as [`Board::play_move`].
    pub fn play_move_at(
        &mut self,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<Option<Piece>, MoveError> {
        let from = Square::try_from(from)?;
        let to = Square::try_from(to)?;
        self.play_move(from, to)
    }
}
