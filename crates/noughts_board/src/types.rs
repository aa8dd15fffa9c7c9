//! Core domain types for the board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// One of the two player symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The opening mark. `X` always moves first.
    X,
    /// The second mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    Empty,
    /// The square is held by a mark.
    Taken(Mark),
}

/// Error raised when addressing a square outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("square index {index} is out of range (0-8)")]
pub struct OutOfRange {
    /// The offending index.
    pub index: usize,
}

/// 3x3 board with squares in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given square (0-8).
    pub fn get(&self, square: usize) -> Option<Cell> {
        self.cells.get(square).copied()
    }

    /// Sets the cell at the given square.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `square` is not a board index.
    pub fn set(&mut self, square: usize, cell: Cell) -> Result<(), OutOfRange> {
        if square >= 9 {
            return Err(OutOfRange { index: square });
        }
        self.cells[square] = cell;
        Ok(())
    }

    /// Checks if a square exists and is unclaimed.
    pub fn is_empty(&self, square: usize) -> bool {
        matches!(self.get(square), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of squares holding a mark.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid, showing 1-based square numbers for empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let square = row * 3 + col;
                match self.cells[square] {
                    Cell::Empty => write!(f, "{}", square + 1)?,
                    Cell::Taken(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}
