#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
mod effect;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod scenario;
mod shape;
mod ship;
mod ui;

pub use bitboard::aliases::{GridMask, PatternMask};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::{BoardError, ParseLayoutError, PlacementFailure};
pub use config::*;
pub use effect::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use scenario::*;
pub use shape::*;
pub use ship::*;
pub use ui::*;
