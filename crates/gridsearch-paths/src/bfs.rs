use std::collections::VecDeque;

use gridsearch_core::Position;

use crate::error::{SearchError, validate};
use crate::neighbors::Neighbors;
use crate::node::NodeArena;
use crate::observer::{Cadence, Observer, Progress};
use crate::outcome::SearchOutcome;
use crate::traits::SearchSpace;
use crate::visited::VisitedSet;

const EXPANDED_CADENCE: Cadence = Cadence::every(10);

/// Breadth-first search with a FIFO queue.
///
/// Positions are marked visited when enqueued, so each one is dequeued at
/// most once and the first path to reach the goal has the fewest steps.
/// Every newly enqueued node is reported as [`Progress::Discovered`].
pub fn bfs<S, O>(
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
    let mut queue = VecDeque::new();
    let mut nb = Neighbors::new();

    queue.push_back(arena.root(start, 0));
    visited.insert(start);
    let mut explored = 0;

    while let Some(id) = queue.pop_front() {
        explored += 1;
        let current = *arena.get(id);
        if EXPANDED_CADENCE.hits(explored) {
            observer.observe(Progress::Expanded(&current));
        }

        if current.pos == goal {
            return Ok(SearchOutcome::found(arena.reconstruct_path(id), explored));
        }

        for &np in nb.expand(space, current.pos) {
            if !visited.insert(np) {
                continue;
            }
            let child = arena.child(id, np, 0, 0);
            queue.push_back(child);
            observer.observe(Progress::Discovered(arena.get(child)));
        }
    }

    Ok(SearchOutcome::not_found(explored))
}
