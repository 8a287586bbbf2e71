//! Board representation for the six-pawns line game

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Number of cells on the line
pub const BOARD_CELLS: usize = 13;
/// Index of the single empty cell in the initial position
pub const CENTER: usize = 6;

/// Cell contents. `White` and `Black` double as side identifiers:
/// every API that takes a side expects one of those two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::White => Cell::Black,
            Cell::Black => Cell::White,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Movement direction along the line: White advances toward
    /// higher indices, Black toward lower ones.
    #[inline]
    pub fn direction(self) -> i32 {
        match self {
            Cell::White => 1,
            Cell::Black => -1,
            Cell::Empty => 0,
        }
    }

    /// True for White or Black, false for Empty
    #[inline]
    pub fn is_piece(self) -> bool {
        self != Cell::Empty
    }
}

/// Kind of move, distinguished by travel distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// One cell forward into an empty cell
    Step = 1,
    /// Two cells forward over one occupied cell
    Jump = 2,
}

/// A move from one cell index to another.
///
/// Only in-range indices are representable; constructing a `Move`
/// with an index outside the board is a caller bug and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    /// # Panics
    ///
    /// Panics if either index is outside `0..BOARD_CELLS`.
    #[inline]
    pub fn new(from: usize, to: usize) -> Self {
        assert!(
            from < BOARD_CELLS && to < BOARD_CELLS,
            "move index out of range: {from} -> {to}"
        );
        Self { from, to }
    }

    /// Travel distance in cells (1 for a step, 2 for a jump)
    #[inline]
    pub fn distance(self) -> usize {
        self.from.abs_diff(self.to)
    }
}
