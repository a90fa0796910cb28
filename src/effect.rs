//! Overlaying ability patterns onto the combined grid.

use core::str::FromStr;

use crate::common::{parse_entry, ParseLayoutError};
use crate::config::PATTERN_CENTER;
use crate::grid::{CellState, Grid};
use crate::shape::{Pattern, ShapeKind};

/// An ability shape anchored at an origin cell of the main grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectPlacement {
    pub shape: ShapeKind,
    pub row: usize,
    pub col: usize,
}

impl EffectPlacement {
    pub const fn new(shape: ShapeKind, row: usize, col: usize) -> Self {
        Self { shape, row, col }
    }
}

/// Parses `<shape>@<row>,<col>`, e.g. `cross@5,5`.
impl FromStr for EffectPlacement {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, row, col) = parse_entry(s)?;
        Ok(EffectPlacement::new(kind.parse()?, row, col))
    }
}

/// Apply `pattern` with its center on (row, col).
///
/// Each affected in-bounds cell of `combined` becomes [`CellState::Overlap`]
/// when `base` holds a ship there and [`CellState::Effect`] otherwise. Cells
/// that land outside the grid are skipped. Returns the number of cells
/// written.
pub fn apply_effect(
    base: &Grid,
    combined: &mut Grid,
    pattern: &Pattern,
    row: usize,
    col: usize,
) -> usize {
    let mut written = 0;
    for (pr, pc) in pattern.iter_set_bits() {
        let (Some(r), Some(c)) = (
            row.checked_add(pr).and_then(|r| r.checked_sub(PATTERN_CENTER)),
            col.checked_add(pc).and_then(|c| c.checked_sub(PATTERN_CENTER)),
        ) else {
            continue;
        };
        if let (Some(under), Some(cell)) = (base.get(r, c), combined.cell_mut(r, c)) {
            *cell = if under == CellState::Ship {
                CellState::Overlap
            } else {
                CellState::Effect
            };
            written += 1;
        }
    }
    log::debug!("effect at ({},{}) covered {} cells", row, col, written);
    written
}
