//! Knight-move graph over the 64 board squares.
//!
//! Adjacency is computed once per square from a fixed offset list, so the
//! neighbor order (and therefore BFS tie-breaking) is reproducible.

use once_cell::sync::Lazy;

use super::error::PathError;
use super::types::{Bitboard, Square, NUM_SQUARES};

/// Knight displacements as (column, row) deltas, in enumeration order.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
];

static KNIGHT_GRAPH: Lazy<KnightGraph> = Lazy::new(KnightGraph::build);

/// Squares reachable from one square by a single knight move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors {
    squares: [Square; 8],
    len: usize,
    mask: Bitboard,
}

impl Neighbors {
    fn for_square(origin: Square) -> Self {
        // Unused slots keep the origin; they are never exposed.
        let mut squares = [origin; 8];
        let mut len = 0;
        let mut mask = Bitboard::EMPTY;
        for (d_column, d_row) in KNIGHT_OFFSETS {
            if let Some(sq) = origin.offset(d_column, d_row) {
                squares[len] = sq;
                len += 1;
                mask.insert(sq);
            }
        }
        Neighbors { squares, len, mask }
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, sq: Square) -> bool {
        self.mask.contains(sq)
    }

    /// The neighbor set as a bitboard.
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> Bitboard {
        self.mask
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The undirected, unweighted graph of legal knight moves on an 8x8 board.
///
/// Read-only after construction, so a single instance can be shared freely
/// between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnightGraph {
    adjacency: Vec<Neighbors>,
}

impl KnightGraph {
    /// Build the graph. Vertices are laid out column-major, matching [`Square::index`].
    #[must_use]
    pub fn build() -> Self {
        let adjacency: Vec<Neighbors> = Square::all().map(Neighbors::for_square).collect();
        // Every square on an 8x8 board has at least two knight moves.
        debug_assert!(adjacency.iter().all(|n| !n.is_empty()));
        KnightGraph { adjacency }
    }

    /// Process-wide graph, built on first use.
    #[must_use]
    pub fn shared() -> &'static KnightGraph {
        &KNIGHT_GRAPH
    }

    /// Precomputed neighbors of `sq`, in offset order.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, sq: Square) -> &Neighbors {
        &self.adjacency[sq.index()]
    }

    /// Neighbors of a raw coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::OutOfRange`] if either coordinate lies outside 1-8.
    pub fn neighbors_of(&self, column: i32, row: i32) -> Result<&Neighbors, PathError> {
        let sq = PathError::check_square((column, row))?;
        Ok(self.neighbors(sq))
    }

    #[inline]
    #[must_use]
    pub fn degree(&self, sq: Square) -> usize {
        self.neighbors(sq).len()
    }

    /// True if `from` and `to` are one knight move apart.
    #[inline]
    #[must_use]
    pub fn is_knight_move(&self, from: Square, to: Square) -> bool {
        self.neighbors(from).contains(to)
    }

    /// All vertices in index order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.adjacency.len()).filter_map(Square::from_index)
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        debug_assert_eq!(self.adjacency.len(), NUM_SQUARES);
        self.adjacency.len()
    }
}

impl Default for KnightGraph {
    fn default() -> Self {
        Self::build()
    }
}

/// Build the knight graph. Call once per session and reuse it.
#[must_use]
pub fn build_graph() -> KnightGraph {
    KnightGraph::build()
}
