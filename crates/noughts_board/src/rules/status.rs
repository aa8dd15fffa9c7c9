//! Status derivation.

use super::{is_full, next_mark, winner};
use crate::{Board, Mark};
use tracing::instrument;

/// Derived state of a board, ready for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Somebody completed a line.
    Won(Mark),
    /// Every square is filled and nobody won.
    Draw,
    /// The game continues with the given mark to move.
    InProgress(Mark),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Won(mark) => write!(f, "Winner: {mark}"),
            Status::Draw => write!(f, "Scratch: Cat's game"),
            Status::InProgress(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

/// Derives the status of a board from its winner, fill state, and next mark.
#[instrument]
pub fn status(board: &Board) -> Status {
    if let Some(mark) = winner(board) {
        Status::Won(mark)
    } else if is_full(board) {
        Status::Draw
    } else {
        Status::InProgress(next_mark(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_fresh_board_in_progress() {
        let board = Board::new();
        assert_eq!(status(&board), Status::InProgress(Mark::X));
        assert_eq!(status(&board).to_string(), "Next player: X");
    }

    #[test]
    fn test_winner_status() {
        let mut board = Board::new();
        for square in [0, 1, 2] {
            board.set(square, Cell::Taken(Mark::X)).unwrap();
        }
        assert_eq!(status(&board), Status::Won(Mark::X));
        assert_eq!(status(&board).to_string(), "Winner: X");
    }

    #[test]
    fn test_draw_status() {
        let mut board = Board::new();
        // X O X / O X X / O X O - full with no line held by one mark
        for (square, mark) in [
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::O),
        ] {
            board.set(square, Cell::Taken(mark)).unwrap();
        }
        assert_eq!(status(&board), Status::Draw);
        assert_eq!(status(&board).to_string(), "Scratch: Cat's game");
    }
}
