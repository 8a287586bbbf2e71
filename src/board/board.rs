//! The 13-cell line board

use super::{Cell, BOARD_CELLS, CENTER};

/// Line board holding exactly 13 cells.
///
/// Starting from [`Board::new`], every reachable position contains
/// six White pawns, six Black pawns and one empty cell: the only
/// mutation primitive is [`Board::relocate`], which moves a single
/// pawn into a cell the rules layer has already verified empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

/// Terminal position: the sides have fully exchanged halves
const GOAL: [Cell; BOARD_CELLS] = swapped_config();

const fn swapped_config() -> [Cell; BOARD_CELLS] {
    let mut cells = [Cell::Empty; BOARD_CELLS];
    let mut i = 0;
    while i < CENTER {
        cells[i] = Cell::Black;
        cells[i + CENTER + 1] = Cell::White;
        i += 1;
    }
    cells
}

impl Board {
    /// Create the initial position: White on 0..=5, Black on 7..=12,
    /// the center cell empty.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for i in 0..CENTER {
            cells[i] = Cell::White;
            cells[i + CENTER + 1] = Cell::Black;
        }
        Self { cells }
    }

    /// Build a board from an explicit cell layout.
    ///
    /// Intended for setting up positions in tests; no count invariant
    /// is enforced here.
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Get the cell at an index
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `0..BOARD_CELLS`.
    #[inline]
    pub fn get(&self, index: usize) -> Cell {
        assert!(index < BOARD_CELLS, "cell index out of range: {index}");
        self.cells[index]
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Cell::Empty
    }

    /// True exactly for the fully swapped position (Black on 0..=5,
    /// White on 7..=12). Partial progress does not count.
    #[inline]
    pub fn is_goal(&self) -> bool {
        self.cells == GOAL
    }

    /// Count pieces of one color
    pub fn count(&self, color: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Move the pawn at `from` into `to`. The caller guarantees `to`
    /// is empty; this is the only way a board changes after creation.
    #[inline]
    pub(crate) fn relocate(&mut self, from: usize, to: usize) {
        self.cells[to] = self.cells[from];
        self.cells[from] = Cell::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
