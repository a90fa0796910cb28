//! Ship orientations, footprints and placement records.

use core::fmt;
use core::str::FromStr;

use crate::common::{parse_entry, ParseLayoutError};
use crate::config::SHIP_LENGTH;
use crate::grid::Grid;

/// The cells a ship covers, from its origin outwards.
pub type Footprint = [(usize, usize); SHIP_LENGTH];

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Row fixed, columns increase.
    Horizontal,
    /// Column fixed, rows increase.
    Vertical,
    /// Rows and columns both increase.
    DiagonalDownRight,
    /// Rows increase while columns decrease.
    DiagonalDownLeft,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDownRight,
        Orientation::DiagonalDownLeft,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::DiagonalDownRight => "diagonal down-right",
            Orientation::DiagonalDownLeft => "diagonal down-left",
        }
    }

    /// The `i`-th cell of a ship starting at (row, col), or `None` when a
    /// coordinate would go negative. Upper bounds are not checked here.
    pub fn cell(self, row: usize, col: usize, i: usize) -> Option<(usize, usize)> {
        match self {
            Orientation::Horizontal => Some((row, col.checked_add(i)?)),
            Orientation::Vertical => Some((row.checked_add(i)?, col)),
            Orientation::DiagonalDownRight => Some((row.checked_add(i)?, col.checked_add(i)?)),
            Orientation::DiagonalDownLeft => Some((row.checked_add(i)?, col.checked_sub(i)?)),
        }
    }

    /// Every cell of a ship starting at (row, col), or `None` if any of them
    /// falls outside the grid.
    pub fn footprint(self, row: usize, col: usize) -> Option<Footprint> {
        let mut cells = [(0, 0); SHIP_LENGTH];
        for (i, slot) in cells.iter_mut().enumerate() {
            let (r, c) = self.cell(row, col, i)?;
            if !Grid::contains(r, c) {
                return None;
            }
            *slot = (r, c);
        }
        Some(cells)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Orientation::Horizontal),
            "v" | "vertical" => Ok(Orientation::Vertical),
            "dr" | "diag-down-right" | "diagonal-down-right" => {
                Ok(Orientation::DiagonalDownRight)
            }
            "dl" | "diag-down-left" | "diagonal-down-left" => Ok(Orientation::DiagonalDownLeft),
            _ => Err(ParseLayoutError::UnknownOrientation),
        }
    }
}

/// Where a ship goes: its origin cell and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl ShipPlacement {
    pub const fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }
}

/// Parses `<orientation>@<row>,<col>`, e.g. `dr@7,0`.
impl FromStr for ShipPlacement {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, row, col) = parse_entry(s)?;
        Ok(ShipPlacement::new(row, col, kind.parse()?))
    }
}
