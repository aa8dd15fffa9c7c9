//! Win detection.

use crate::{Board, Cell, Mark};
use tracing::instrument;

/// The 8 winning lines: rows top-to-bottom, columns left-to-right, then
/// the two diagonals. The scan order is fixed so evaluation stays
/// deterministic.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line held entirely by one mark,
/// `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        if let Cell::Taken(mark) = cells[a] {
            if cells[a] == cells[b] && cells[a] == cells[c] {
                return Some(mark);
            }
        }
    }
    None
}
