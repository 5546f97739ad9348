//! Core board types.
//!
//! - `Square` - a validated (column, row) coordinate
//! - `Bitboard` - 64-bit square set

mod bitboard;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use square::{Square, BOARD_SIZE, NUM_SQUARES};
