//! Ship placement: validation against the grid and writing ship cells.

use crate::bitboard::aliases::GridMask;
use crate::common::{BoardError, PlacementFailure};
use crate::grid::{CellState, Grid};
use crate::ship::{Footprint, Orientation, ShipPlacement};

/// Validate a ship starting at (row, col). On success returns the cells it
/// would occupy. Never modifies the grid.
pub fn check_placement(
    grid: &Grid,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> Result<Footprint, PlacementFailure> {
    let cells = orientation
        .footprint(row, col)
        .ok_or(PlacementFailure::OutOfBounds)?;
    let mask = GridMask::from_iter(cells).map_err(|_| PlacementFailure::OutOfBounds)?;
    let occupied = !grid.mask(CellState::Water);
    if !(occupied & mask).is_empty() {
        return Err(PlacementFailure::Occupied);
    }
    Ok(cells)
}

/// Returns `true` if a ship fits at (row, col) with `orientation` and every
/// target cell is water.
pub fn can_place(grid: &Grid, row: usize, col: usize, orientation: Orientation) -> bool {
    check_placement(grid, row, col, orientation).is_ok()
}

/// Write a ship without validating it first. Cells outside the grid are
/// skipped and anything already there is overwritten, so callers must run
/// [`can_place`] beforehand.
pub fn place_unchecked(grid: &mut Grid, row: usize, col: usize, orientation: Orientation) {
    for i in 0..crate::config::SHIP_LENGTH {
        if let Some((r, c)) = orientation.cell(row, col, i) {
            if let Some(cell) = grid.cell_mut(r, c) {
                *cell = CellState::Ship;
            }
        }
    }
}

/// Grid plus the footprint of every ship placed so far.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    ship_map: GridMask,
    ships: usize,
}

impl Board {
    /// Create an all-water board with no ships.
    pub fn new() -> Self {
        Board {
            grid: Grid::new(),
            ship_map: GridMask::new(),
            ships: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> GridMask {
        self.ship_map
    }

    /// Number of ships placed.
    pub fn ship_count(&self) -> usize {
        self.ships
    }

    /// Validate and place the next ship. On failure the board is unchanged and
    /// the error names the ship by its 1-based placement number.
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.ships + 1;
        let cells = check_placement(&self.grid, row, col, orientation).map_err(|reason| {
            BoardError::PlacementInvalid {
                ship,
                row,
                col,
                orientation,
                reason,
            }
        })?;
        let mask = GridMask::from_iter(cells)?;
        for &(r, c) in cells.iter() {
            if let Some(cell) = self.grid.cell_mut(r, c) {
                *cell = CellState::Ship;
            }
        }
        self.ship_map |= mask;
        self.ships = ship;
        log::debug!("placed ship {} ({}) at ({},{})", ship, orientation, row, col);
        Ok(())
    }

    /// Place every ship in order, stopping at the first invalid placement.
    pub fn place_fleet(&mut self, fleet: &[ShipPlacement]) -> Result<(), BoardError> {
        for placement in fleet {
            self.place(placement.row, placement.col, placement.orientation)?;
        }
        Ok(())
    }

    /// Consume the board, keeping only the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
