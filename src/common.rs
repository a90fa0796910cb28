//! Common types: placement failures, board errors and layout parse errors.

use crate::bitboard::BitBoardError;
use crate::ship::Orientation;

/// Why a ship could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementFailure {
    /// One or more ship cells fall outside the grid.
    OutOfBounds,
    /// One or more ship cells are not water.
    Occupied,
}

impl core::fmt::Display for PlacementFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementFailure::OutOfBounds => write!(f, "ship does not fit inside the grid"),
            PlacementFailure::Occupied => write!(f, "ship overlaps an occupied cell"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Ship number `ship` (1-based, in placement order) failed validation.
    PlacementInvalid {
        ship: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
        reason: PlacementFailure,
    },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::PlacementInvalid {
                ship,
                row,
                col,
                orientation,
                reason,
            } => write!(
                f,
                "cannot place ship {} ({}) at ({},{}): {}",
                ship, orientation, row, col, reason
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors from parsing `<kind>@<row>,<col>` layout entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLayoutError {
    /// The entry has no `@` separating kind and origin.
    MissingOrigin,
    /// The origin is not two comma-separated unsigned integers.
    BadCoordinate,
    UnknownOrientation,
    UnknownShape,
}

impl core::fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseLayoutError::MissingOrigin => write!(f, "expected <kind>@<row>,<col>"),
            ParseLayoutError::BadCoordinate => {
                write!(f, "origin must be <row>,<col> with non-negative integers")
            }
            ParseLayoutError::UnknownOrientation => write!(
                f,
                "unknown orientation (expected horizontal, vertical, diag-down-right or diag-down-left)"
            ),
            ParseLayoutError::UnknownShape => {
                write!(f, "unknown shape (expected cone, cross or diamond)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseLayoutError {}

/// Split `<kind>@<row>,<col>` into its kind and origin.
pub(crate) fn parse_entry(input: &str) -> Result<(&str, usize, usize), ParseLayoutError> {
    let (kind, origin) = input
        .trim()
        .split_once('@')
        .ok_or(ParseLayoutError::MissingOrigin)?;
    let (row, col) = origin
        .split_once(',')
        .ok_or(ParseLayoutError::BadCoordinate)?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| ParseLayoutError::BadCoordinate)?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| ParseLayoutError::BadCoordinate)?;
    Ok((kind.trim(), row, col))
}
