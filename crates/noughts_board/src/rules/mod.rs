//! Game rules for the board.
//!
//! Rules are pure functions separated from board storage, so callers can
//! derive turn, winner, and status for any snapshot without holding game
//! state of their own.

pub mod draw;
pub mod status;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use status::{Status, status};
pub use turn::next_mark;
pub use win::winner;
