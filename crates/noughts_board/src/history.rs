//! Replayable move history with branch truncation.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::rules::{Status, next_mark, status, winner};
use crate::{Board, Cell};

/// An ordered record of board snapshots with a cursor for time travel.
///
/// The first snapshot is always the empty board. Playing a move while the
/// cursor points at a past snapshot discards everything after the cursor
/// before appending, so the new line of play replaces the abandoned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    boards: Vec<Board>,
    cursor: usize,
}

impl History {
    /// Starts a fresh history holding a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Rebuilds a history from persisted parts.
    ///
    /// Returns `None` when the parts violate the structural invariants:
    /// an empty record, an opening snapshot that is not the empty board,
    /// or a cursor past the end. Callers rehydrating stored state can then
    /// fall back to a fresh game instead of running on inconsistent state.
    #[instrument(skip(boards), fields(len = boards.len(), cursor))]
    pub fn from_parts(boards: Vec<Board>, cursor: usize) -> Option<Self> {
        if boards.is_empty() || boards[0] != Board::new() || cursor >= boards.len() {
            warn!("rejecting inconsistent history parts");
            return None;
        }
        Some(Self { boards, cursor })
    }

    /// The board the cursor points at.
    pub fn current(&self) -> &Board {
        &self.boards[self.cursor]
    }

    /// Cursor position into the record.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All recorded snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Derived status of the current board.
    pub fn status(&self) -> Status {
        status(self.current())
    }

    /// Plays the next mark at `square` on the current board.
    ///
    /// An illegal move - finished game, occupied square, or an index
    /// outside the grid - is rejected silently: nothing changes and
    /// `false` is returned.
    #[instrument(skip(self), fields(square, cursor = self.cursor))]
    pub fn play(&mut self, square: usize) -> bool {
        let board = self.current();
        if winner(board).is_some() || !board.is_empty(square) {
            debug!("move rejected");
            return false;
        }

        let mark = next_mark(board);
        let mut next = board.clone();
        if next.set(square, Cell::Taken(mark)).is_err() {
            return false;
        }

        self.boards.truncate(self.cursor + 1);
        self.boards.push(next);
        self.cursor = self.boards.len() - 1;
        debug!(%mark, "move accepted");
        true
    }

    /// Moves the cursor to an existing step.
    ///
    /// Returns `false` without moving if `step` is past the end.
    #[instrument(skip(self))]
    pub fn jump(&mut self, step: usize) -> bool {
        if step >= self.boards.len() {
            debug!("jump rejected");
            return false;
        }
        self.cursor = step;
        true
    }

    /// Resets the record to a single empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.boards = vec![Board::new()];
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
