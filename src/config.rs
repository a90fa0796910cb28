use crate::effect::EffectPlacement;
use crate::shape::ShapeKind;
use crate::ship::{Orientation, ShipPlacement};

pub const GRID_SIZE: usize = 10;
pub const SHIP_LENGTH: usize = 3;
pub const PATTERN_SIZE: usize = 5;
/// Index of the pattern cell aligned with an effect's origin.
pub const PATTERN_CENTER: usize = PATTERN_SIZE / 2;

/// Fleet of the novice level: one horizontal and one vertical ship.
pub const NOVICE_FLEET: [ShipPlacement; 2] = [
    ShipPlacement::new(1, 1, Orientation::Horizontal),
    ShipPlacement::new(4, 6, Orientation::Vertical),
];

/// Fleet of the adventurer and master levels, adding both diagonals.
pub const FULL_FLEET: [ShipPlacement; 4] = [
    ShipPlacement::new(1, 1, Orientation::Horizontal),
    ShipPlacement::new(4, 6, Orientation::Vertical),
    ShipPlacement::new(7, 0, Orientation::DiagonalDownRight),
    ShipPlacement::new(0, 9, Orientation::DiagonalDownLeft),
];

/// Abilities applied in the master level, in application order.
pub const MASTER_EFFECTS: [EffectPlacement; 3] = [
    EffectPlacement::new(ShapeKind::Cone, 2, 4),
    EffectPlacement::new(ShapeKind::Cross, 5, 5),
    EffectPlacement::new(ShapeKind::Diamond, 7, 2),
];

/// Progressive variants of the setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Novice,
    Adventurer,
    Master,
}

impl Level {
    pub fn fleet(self) -> &'static [ShipPlacement] {
        match self {
            Level::Novice => &NOVICE_FLEET,
            Level::Adventurer | Level::Master => &FULL_FLEET,
        }
    }

    /// Abilities applied at this level; empty below master.
    pub fn effects(self) -> &'static [EffectPlacement] {
        match self {
            Level::Master => &MASTER_EFFECTS,
            Level::Novice | Level::Adventurer => &[],
        }
    }
}
