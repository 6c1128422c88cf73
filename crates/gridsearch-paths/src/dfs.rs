use gridsearch_core::Position;

use crate::error::{SearchError, validate};
use crate::neighbors::Neighbors;
use crate::node::NodeArena;
use crate::observer::{Cadence, Observer, Progress};
use crate::outcome::SearchOutcome;
use crate::traits::SearchSpace;
use crate::visited::VisitedSet;

const EXPANDED_CADENCE: Cadence = Cadence::every(5);

/// Depth-first search with an explicit LIFO stack.
///
/// Neighbors are pushed in expansion order, so the last one (left) is
/// explored first. A position can sit on the stack several times; only the
/// first pop is accepted. The path found is generally not the shortest.
pub fn dfs<S, O>(
    space: &S,
    start: Position,
    goal: Position,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError>
where
    S: SearchSpace + ?Sized,
    O: Observer + ?Sized,
{
    validate(space, start, goal)?;

    let mut arena = NodeArena::new();
    let mut visited = VisitedSet::new(space.bounds());
    let mut stack = vec![arena.root(start, 0)];
    let mut nb = Neighbors::new();
    let mut explored = 0;

    while let Some(id) = stack.pop() {
        let current = *arena.get(id);
        if !visited.insert(current.pos) {
            continue;
        }
        explored += 1;
        if EXPANDED_CADENCE.hits(explored) {
            observer.observe(Progress::Expanded(&current));
        }

        if current.pos == goal {
            return Ok(SearchOutcome::found(arena.reconstruct_path(id), explored));
        }

        for &np in nb.expand(space, current.pos) {
            if !visited.contains(np) {
                stack.push(arena.child(id, np, 0, 0));
            }
        }
    }

    Ok(SearchOutcome::not_found(explored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoObserver;
    use gridsearch_core::OccupancyGrid;

    #[test]
    fn left_neighbor_is_explored_first() {
        // From the middle of a 3x3 grid, left (pushed last) is popped first.
        let g = OccupancyGrid::new(3, 3);
        let out = dfs(&g, Position::new(1, 1), Position::new(1, 0), &mut NoObserver)
            .unwrap();
        assert_eq!(out.path, Some(vec![Position::new(1, 1), Position::new(1, 0)]));
        assert_eq!(out.nodes_explored, 2);
    }

    #[test]
    fn may_return_longer_than_optimal() {
        // Goal directly below the start, but the stack dives right first.
        let g = OccupancyGrid::new(2, 3);
        let out = dfs(&g, Position::new(0, 0), Position::new(1, 0), &mut NoObserver)
            .unwrap();
        let path = out.path.unwrap();
        assert_eq!(path.first(), Some(&Position::new(0, 0)));
        assert_eq!(path.last(), Some(&Position::new(1, 0)));
        assert!(path.len() - 1 > 1);
    }

    #[test]
    fn stale_entries_are_skipped() {
        let g = OccupancyGrid::new(3, 3);
        let out = dfs(&g, Position::ZERO, Position::new(2, 2), &mut NoObserver)
            .unwrap();
        let path = out.path.unwrap();
        let mut unique = path.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), path.len());
        assert!(out.nodes_explored <= 9);
    }
}
