//! Synchronization primitives for embedding the engine in a multi-caller
//! host.
//!
//! King lookup and check detection scan the whole board, so they must not
//! interleave with mutation of the same board. `SharedBoard` hands out an
//! exclusive guard for a complete generate-and-apply sequence.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{Board, MoveError, Piece, Square};

/// A thread-safe handle to one live board.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<Mutex<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(Mutex::new(board)))
    }

    /// Lock the board for an arbitrary sequence of queries and moves.
    pub fn lock(&self) -> MutexGuard<'_, Board> {
        self.0.lock()
    }

    /// Owned copy of the current position, for speculative work outside
    /// the lock.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.lock().clone()
    }

    /// Legal destinations from `from`, computed under the lock.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        self.0.lock().legal_moves(from)
    }

    /// Validate and play `from -> to` while holding the lock throughout.
    ///
    /// # Errors
    /// Same as [`Board::play_move`].
    pub fn play_move(&self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        self.0.lock().play_move(from, to)
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}
