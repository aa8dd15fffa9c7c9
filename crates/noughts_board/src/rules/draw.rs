//! Draw detection.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all squares claimed).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
