//! Text rendering of grids and patterns.

use alloc::string::String;
use core::fmt::Write;

use crate::config::GRID_SIZE;
use crate::grid::Grid;
use crate::shape::Pattern;

/// Explains the numeric cell values of a combined grid.
pub const LEGEND: &str =
    "Legend: 0 = water, 3 = ship, 5 = ability area, 8 = ship inside ability area";

/// Render a grid with a header of column indices and each row prefixed by
/// its index.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, "{} ", c);
    }
    out.push('\n');
    for (r, row) in grid.rows().enumerate() {
        let _ = write!(out, "{:2} ", r);
        for cell in row {
            let _ = write!(out, "{} ", cell.value());
        }
        out.push('\n');
    }
    out
}

/// Render a pattern as rows of 0/1 values.
pub fn render_pattern(pattern: &Pattern) -> String {
    let mut out = String::new();
    let size = pattern.size();
    for r in 0..size {
        for c in 0..size {
            let bit = pattern.get(r, c).unwrap_or(false);
            let _ = write!(out, "{} ", u8::from(bit));
        }
        out.push('\n');
    }
    out
}
