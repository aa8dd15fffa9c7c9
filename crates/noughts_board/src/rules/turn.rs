//! Turn derivation.

use crate::{Board, Mark};
use tracing::instrument;

/// Returns the mark that moves next.
///
/// `X` opens, so `X` is up whenever an even number of squares is filled.
#[instrument]
pub fn next_mark(board: &Board) -> Mark {
    if board.filled() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_x_opens() {
        let board = Board::new();
        assert_eq!(next_mark(&board), Mark::X);
    }

    #[test]
    fn test_o_follows() {
        let mut board = Board::new();
        board.set(4, Cell::Taken(Mark::X)).unwrap();
        assert_eq!(next_mark(&board), Mark::O);
    }

    #[test]
    fn test_back_to_x() {
        let mut board = Board::new();
        board.set(4, Cell::Taken(Mark::X)).unwrap();
        board.set(0, Cell::Taken(Mark::O)).unwrap();
        assert_eq!(next_mark(&board), Mark::X);
    }
}
