//! Breadth-first shortest-path search over the knight graph.

use std::collections::VecDeque;

use super::error::PathError;
use super::graph::KnightGraph;
use super::types::{Bitboard, Square, NUM_SQUARES};

/// Outcome of one BFS run: who discovered each visited square, and at what depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub(crate) start: Square,
    pub(crate) predecessors: [Option<Square>; NUM_SQUARES],
    pub(crate) depths: [u8; NUM_SQUARES],
    pub(crate) visited: Bitboard,
}

impl SearchResult {
    fn new(start: Square) -> Self {
        SearchResult {
            start,
            predecessors: [None; NUM_SQUARES],
            depths: [0; NUM_SQUARES],
            visited: Bitboard::from_square(start),
        }
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> Square {
        self.start
    }

    /// The square `sq` was first discovered from; `None` for the start or unvisited squares.
    #[inline]
    #[must_use]
    pub fn predecessor(&self, sq: Square) -> Option<Square> {
        self.predecessors[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_visited(&self, sq: Square) -> bool {
        self.visited.contains(sq)
    }

    /// Number of knight moves from the start to `sq`, if the search reached it.
    #[inline]
    #[must_use]
    pub fn distance(&self, sq: Square) -> Option<u8> {
        self.is_visited(sq).then(|| self.depths[sq.index()])
    }

    #[inline]
    #[must_use]
    pub fn visited(&self) -> Bitboard {
        self.visited
    }
}

fn bfs(graph: &KnightGraph, start: Square, target: Option<Square>) -> SearchResult {
    let mut result = SearchResult::new(start);
    let mut queue = VecDeque::with_capacity(NUM_SQUARES);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        // First discovery is already via a shortest path.
        if target.is_some_and(|t| result.visited.contains(t)) {
            break;
        }
        let depth = result.depths[node.index()] + 1;
        for &next in graph.neighbors(node) {
            if result.visited.contains(next) {
                continue;
            }
            result.visited.insert(next);
            result.predecessors[next.index()] = Some(node);
            result.depths[next.index()] = depth;
            queue.push_back(next);
        }
    }

    result
}

/// Run BFS from `start`, stopping once `target` has been discovered.
///
/// Squares are expanded in FIFO order and neighbors in [`KNIGHT_OFFSETS`]
/// order, so ties between equally short paths always resolve the same way.
///
/// [`KNIGHT_OFFSETS`]: super::graph::KNIGHT_OFFSETS
#[must_use]
pub fn search(graph: &KnightGraph, start: Square, target: Square) -> SearchResult {
    bfs(graph, start, Some(target))
}

/// Run BFS from `start` over the whole graph.
#[must_use]
pub fn explore(graph: &KnightGraph, start: Square) -> SearchResult {
    bfs(graph, start, None)
}

/// [`search`] on raw coordinates.
///
/// # Errors
///
/// Returns [`PathError::OutOfRange`] before searching if either coordinate
/// pair lies off the board.
pub fn search_coords(
    graph: &KnightGraph,
    start: (i32, i32),
    target: (i32, i32),
) -> Result<SearchResult, PathError> {
    let start = PathError::check_square(start)?;
    let target = PathError::check_square(target)?;
    Ok(search(graph, start, target))
}

/// Minimum number of knight moves between two squares.
#[must_use]
pub fn distance(graph: &KnightGraph, from: Square, to: Square) -> Option<u8> {
    search(graph, from, to).distance(to)
}

/// Knight distance from `start` to every square, indexed by [`Square::index`].
#[must_use]
pub fn distances_from(graph: &KnightGraph, start: Square) -> [Option<u8>; NUM_SQUARES] {
    let result = explore(graph, start);
    let mut out = [None; NUM_SQUARES];
    for sq in graph.squares() {
        out[sq.index()] = result.distance(sq);
    }
    out
}
