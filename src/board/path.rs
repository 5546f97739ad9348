//! Path reconstruction from BFS predecessor maps.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PathError;
use super::graph::KnightGraph;
use super::search::{search, SearchResult};
use super::types::{Square, NUM_SQUARES};

/// Ordered squares from start to target inclusive, each step a knight move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Square>", into = "Vec<Square>")
)]
pub struct KnightPath {
    squares: Vec<Square>,
}

impl KnightPath {
    #[inline]
    #[must_use]
    pub fn start(&self) -> Square {
        self.squares[0]
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    /// Number of knight moves (one less than the number of squares).
    #[inline]
    #[must_use]
    pub fn moves(&self) -> usize {
        self.squares.len() - 1
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }

    /// Move number at which the knight stands on `sq` (0 for the start).
    #[must_use]
    pub fn position_of(&self, sq: Square) -> Option<usize> {
        self.squares.iter().position(|&s| s == sq)
    }
}

fn is_knight_step(from: Square, to: Square) -> bool {
    let dc = from.column().abs_diff(to.column());
    let dr = from.row().abs_diff(to.row());
    matches!((dc, dr), (1, 2) | (2, 1))
}

impl TryFrom<Vec<Square>> for KnightPath {
    type Error = PathError;

    /// Accept a square sequence only if it is non-empty and every step is a knight move.
    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        if squares.is_empty() {
            return Err(PathError::EmptyPath);
        }
        if let Some(pair) = squares.windows(2).find(|w| !is_knight_step(w[0], w[1])) {
            return Err(PathError::NotAKnightMove {
                from: pair[0],
                to: pair[1],
            });
        }
        Ok(KnightPath { squares })
    }
}

impl From<KnightPath> for Vec<Square> {
    fn from(path: KnightPath) -> Self {
        path.squares
    }
}

impl fmt::Display for KnightPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.squares.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a KnightPath {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walk the predecessor map back from `target` and return the path in
/// start-to-target order.
///
/// # Errors
///
/// Returns [`PathError::UnreachableTarget`] if the search never visited
/// `target`, or if following predecessors does not lead back to `start`.
pub fn reconstruct(
    result: &SearchResult,
    start: Square,
    target: Square,
) -> Result<KnightPath, PathError> {
    let unreachable = PathError::UnreachableTarget { start, target };
    if !result.is_visited(target) {
        return Err(unreachable);
    }

    let mut squares = Vec::with_capacity(8);
    let mut node = Some(target);
    while let Some(sq) = node {
        // A well-formed map cannot be longer than the board.
        if squares.len() == NUM_SQUARES {
            return Err(unreachable);
        }
        squares.push(sq);
        node = result.predecessor(sq);
    }

    if squares.last() != Some(&start) {
        return Err(unreachable);
    }
    squares.reverse();
    Ok(KnightPath { squares })
}

/// Shortest knight path between two raw coordinate pairs.
///
/// # Errors
///
/// Returns [`PathError::OutOfRange`] if either pair lies off the board, and
/// [`PathError::UnreachableTarget`] if the search fails to reach the target.
///
/// # Example
/// ```
/// use knight_moves::{build_graph, find_path};
///
/// let graph = build_graph();
/// let path = find_path(&graph, (1, 1), (8, 8)).unwrap();
/// assert_eq!(path.moves(), 6);
/// ```
pub fn find_path(
    graph: &KnightGraph,
    start: (i32, i32),
    target: (i32, i32),
) -> Result<KnightPath, PathError> {
    let start = PathError::check_square(start)?;
    let target = PathError::check_square(target)?;
    let result = search(graph, start, target);
    reconstruct(&result, start, target)
}

impl KnightGraph {
    /// Shortest knight path between two squares on this graph.
    ///
    /// # Errors
    ///
    /// See [`reconstruct`].
    pub fn shortest_path(&self, start: Square, target: Square) -> Result<KnightPath, PathError> {
        reconstruct(&search(self, start, target), start, target)
    }
}
