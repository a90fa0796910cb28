//! Ability area patterns: fixed 5×5 masks centered on cell (2, 2).

use core::fmt;
use core::str::FromStr;

use crate::bitboard::aliases::PatternMask;
use crate::common::ParseLayoutError;
use crate::config::PATTERN_CENTER;

/// A 5×5 area-of-effect pattern.
pub type Pattern = PatternMask;

/// Ability shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Triangle with its apex at the top-center, widening downward.
    Cone,
    /// Full center row plus full center column.
    Cross,
    /// Cells within Manhattan distance 2 of the center.
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cone, ShapeKind::Cross, ShapeKind::Diamond];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cone => "cone",
            ShapeKind::Cross => "cross",
            ShapeKind::Diamond => "diamond",
        }
    }

    /// Whether pattern cell (row, col) is inside the area.
    pub fn affects(self, row: usize, col: usize) -> bool {
        let center = PATTERN_CENTER;
        match self {
            ShapeKind::Cone => center.saturating_sub(row) <= col && col <= center + row,
            ShapeKind::Cross => row == center || col == center,
            ShapeKind::Diamond => row.abs_diff(center) + col.abs_diff(center) <= center,
        }
    }

    /// Build the 5×5 pattern for this shape.
    pub fn pattern(self) -> Pattern {
        Pattern::from_fn(|row, col| self.affects(row, col))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cone" => Ok(ShapeKind::Cone),
            "cross" => Ok(ShapeKind::Cross),
            "diamond" | "octahedron" => Ok(ShapeKind::Diamond),
            _ => Err(ParseLayoutError::UnknownShape),
        }
    }
}
