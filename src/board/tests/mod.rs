//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `graph.rs` - Adjacency construction and graph invariants
//! - `search.rs` - BFS predecessor maps and distances
//! - `path.rs` - Path reconstruction and the `find_path` entry point
//! - `proptest.rs` - Property-based tests


use crate::board::Square;

/// Shorthand for building a square in tests.
pub(super) fn sq(column: u8, row: u8) -> Square {
    Square::new(column, row).expect("test square must be on the board")
}
