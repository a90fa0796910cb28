//! The setup flow: place the fleet, copy the grid, overlay abilities.

use crate::board::Board;
use crate::common::BoardError;
use crate::effect::{apply_effect, EffectPlacement};
use crate::grid::Grid;
use crate::ship::ShipPlacement;

/// Result of a completed setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    base: Grid,
    combined: Grid,
}

impl Scenario {
    /// Place `fleet` in order, aborting on the first invalid ship, then apply
    /// `effects` in order to a copy of the resulting grid.
    pub fn run(fleet: &[ShipPlacement], effects: &[EffectPlacement]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        board.place_fleet(fleet)?;
        log::info!("placed {} ships", board.ship_count());

        let base = board.into_grid();
        let mut combined = base;
        for effect in effects {
            let pattern = effect.shape.pattern();
            apply_effect(&base, &mut combined, &pattern, effect.row, effect.col);
        }
        if !effects.is_empty() {
            log::info!("applied {} effects", effects.len());
        }
        Ok(Scenario { base, combined })
    }

    /// Grid holding only water and ships.
    pub fn base(&self) -> &Grid {
        &self.base
    }

    /// Base grid with every effect overlaid.
    pub fn combined(&self) -> &Grid {
        &self.combined
    }
}
