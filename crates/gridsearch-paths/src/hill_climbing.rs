use gridsearch_core::Position;

use crate::error::{SearchError, validate};
use crate::neighbors::traversable;
use crate::node::NodeArena;
use crate::observer::{Observer, Progress};
use crate::outcome::SearchOutcome;
use crate::traits::SearchSpace;
use crate::visited::VisitedSet;

/// Steepest-descent hill climbing on the Manhattan estimate.
///
/// Holds a single current node and never backtracks. Each step moves to the
/// unvisited neighbor with the lowest h; on equal h the first one in
/// expansion order (down, right, up, left) wins. When every neighbor is
/// blocked or already visited the climb stops and reports no path, even if
/// the goal is reachable some other way.
///
/// Every step is reported to the observer.
pub fn hill_climbing<S, O>(
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
    let mut current = arena.root(start, start.manhattan(goal));
    visited.insert(start);
    let mut explored = 0;

    loop {
        explored += 1;
        let node = *arena.get(current);
        observer.observe(Progress::Expanded(&node));

        if node.pos == goal {
            return Ok(SearchOutcome::found(arena.reconstruct_path(current), explored));
        }

        let mut best: Option<(Position, i32)> = None;
        for np in traversable(space, node.pos) {
            if visited.contains(np) {
                continue;
            }
            let h = np.manhattan(goal);
            if best.is_none_or(|(_, best_h)| h < best_h) {
                best = Some((np, h));
            }
        }

        let Some((next, h)) = best else {
            return Ok(SearchOutcome::not_found(explored));
        };
        visited.insert(next);
        current = arena.child(current, next, 0, h);
    }
}
