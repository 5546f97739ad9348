pub mod board;
pub mod ui;

pub use board::{build_graph, find_path, KnightGraph, KnightPath, PathError, Square, SquareError};
