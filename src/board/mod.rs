//! Knight move graph and shortest-path search.
//!
//! The board is modelled as a graph with one vertex per square and an edge
//! for every legal knight move. Paths are found with breadth-first search and
//! rebuilt from the resulting predecessor map.
//!
//! # Example
//! ```
//! use knight_moves::board::{KnightGraph, Square};
//!
//! let graph = KnightGraph::build();
//! let start = Square::new(1, 1).unwrap();
//! let target = Square::new(2, 3).unwrap();
//! let path = graph.shortest_path(start, target).unwrap();
//! println!("{path} takes {} move(s)", path.moves());
//! ```

mod error;
mod graph;
mod path;
mod search;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{PathError, SquareError};
pub use graph::{build_graph, KnightGraph, Neighbors, KNIGHT_OFFSETS};
pub use path::{find_path, reconstruct, KnightPath};
pub use search::{distance, distances_from, explore, search, search_coords, SearchResult};
pub use types::{Bitboard, BitboardIter, Square, BOARD_SIZE, NUM_SQUARES};
