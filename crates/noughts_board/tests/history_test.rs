//! Tests for the replay history and derived rules working together.

use noughts_board::rules::{Status, next_mark};
use noughts_board::{Board, Cell, History, Mark};

#[test]
fn test_turns_alternate_over_accepted_moves() {
    let mut history = History::new();
    let mut expected = Mark::X;
    for square in [4, 0, 8, 2, 6] {
        assert_eq!(next_mark(history.current()), expected);
        assert!(history.play(square));
        expected = expected.opponent();
    }
}

#[test]
fn test_rejected_move_does_not_flip_turn() {
    let mut history = History::new();
    history.play(4);
    let before = next_mark(history.current());
    assert!(!history.play(4));
    assert_eq!(next_mark(history.current()), before);
}

#[test]
fn test_occupied_square_rejected() {
    let mut history = History::new();
    assert!(history.play(0));
    let snapshot = history.clone();
    assert!(!history.play(0));
    assert_eq!(history, snapshot);
}

#[test]
fn test_no_moves_after_win() {
    let mut history = History::new();
    // X takes the top row: X 0, O 3, X 1, O 4, X 2.
    for square in [0, 3, 1, 4, 2] {
        assert!(history.play(square));
    }
    assert_eq!(history.status(), Status::Won(Mark::X));

    let snapshot = history.clone();
    assert!(!history.play(8));
    assert_eq!(history, snapshot);
}

#[test]
fn test_branch_truncation_discards_forward_history() {
    let mut history = History::new();
    for square in [0, 3, 1, 4] {
        assert!(history.play(square));
    }
    assert_eq!(history.boards().len(), 5);

    // Step back to the position after X's second move and branch.
    assert!(history.jump(2));
    assert!(history.play(8));

    assert_eq!(history.boards().len(), 4);
    assert_eq!(history.cursor(), 3);
    // X's branch goes to square 8; the discarded line is gone.
    assert_eq!(history.current().get(8), Some(Cell::Taken(Mark::X)));
    assert_eq!(history.current().get(1), Some(Cell::Empty));
    assert_eq!(history.current().get(4), Some(Cell::Empty));
}

#[test]
fn test_played_out_draw() {
    let mut history = History::new();
    // Ends as X O X / O X X / O X O with no line held by one mark.
    for square in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
        assert!(history.play(square));
    }
    assert_eq!(history.status(), Status::Draw);
    assert_eq!(history.status().to_string(), "Scratch: Cat's game");
}

#[test]
fn test_winner_is_deterministic() {
    let mut board = Board::new();
    for square in [0, 1, 2] {
        board.set(square, Cell::Taken(Mark::X)).unwrap();
    }
    assert_eq!(noughts_board::rules::winner(&board), Some(Mark::X));
    assert_eq!(noughts_board::rules::winner(&Board::new()), None);
}

#[test]
fn test_history_round_trips_through_json() {
    let mut history = History::new();
    for square in [4, 0, 8] {
        assert!(history.play(square));
    }
    let raw = serde_json::to_string(&history).unwrap();
    let rebuilt: History = serde_json::from_str(&raw).unwrap();
    assert_eq!(rebuilt, history);
}
