//! The fixed 10×10 playing grid and its cell states.

use crate::bitboard::aliases::GridMask;
use crate::config::GRID_SIZE;

/// State of a single grid cell. The discriminant is the value printed by the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Water = 0,
    Ship = 3,
    /// Inside an ability area, no ship underneath.
    Effect = 5,
    /// Ship cell inside an ability area.
    Overlap = 8,
}

impl CellState {
    /// Numeric value used when rendering.
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Row-major 10×10 grid of cell states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create a grid filled with water.
    pub fn new() -> Self {
        Grid {
            cells: [[CellState::Water; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Returns `true` if (row, col) lies inside the grid.
    pub const fn contains(row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    /// State at (row, col), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Mutable access to the cell at (row, col), or `None` outside the grid.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut CellState> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Number of cells currently holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Mask of the cells holding `state`.
    pub fn mask(&self, state: CellState) -> GridMask {
        GridMask::from_fn(|r, c| self.cells[r][c] == state)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
