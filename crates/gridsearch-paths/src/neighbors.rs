use gridsearch_core::Position;

use crate::traits::SearchSpace;

/// Cached neighbor expansion helper.
///
/// Yields the traversable 4-adjacent cells of a position in the fixed order
/// down, right, up, left. DFS, IDS and hill climbing depend on this order
/// for reproducible tie-breaking.
pub struct Neighbors {
    buf: Vec<Position>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Traversable neighbors of `p` in `space`.
    pub fn expand<S: SearchSpace + ?Sized>(&mut self, space: &S, p: Position) -> &[Position] {
        self.buf.clear();
        self.buf.extend(traversable(space, p));
        &self.buf
    }
}

/// Traversable neighbors of `p` in expansion order, without a buffer.
///
/// Used where a shared buffer cannot be held across the loop body, such as
/// recursive depth-limited search.
pub fn traversable<S: SearchSpace + ?Sized>(
    space: &S,
    p: Position,
) -> impl Iterator<Item = Position> + '_ {
    p.neighbors_4()
        .into_iter()
        .filter(move |&n| space.is_traversable(n))
}

/// Traversable neighbors of `p`, allocating a fresh vector.
pub fn neighbors<S: SearchSpace + ?Sized>(space: &S, p: Position) -> Vec<Position> {
    traversable(space, p).collect()
}
