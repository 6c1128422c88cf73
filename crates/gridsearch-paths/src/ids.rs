use gridsearch_core::Position;
use log::trace;

use crate::error::{SearchError, validate};
use crate::neighbors::traversable;
use crate::node::{NodeArena, NodeId};
use crate::observer::{Cadence, Observer, Progress};
use crate::outcome::SearchOutcome;
use crate::traits::SearchSpace;
use crate::visited::VisitedSet;

const EXPANDED_CADENCE: Cadence = Cadence::every(10);

/// Iterative deepening search.
///
/// Runs a recursive depth-limited search with limits 0, 1, 2, … up to
/// `rows × cols`, returning the first path found. Within one descent a
/// position may not repeat on the current root-to-node path, but sibling
/// branches may revisit each other's cells.
///
/// `nodes_explored` counts every recursive call across all iterations, so
/// the root is counted once per depth limit.
pub fn ids<S, O>(
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

    let bounds = space.bounds();
    let mut dls = DepthLimited {
        space,
        goal,
        observer,
        arena: NodeArena::new(),
        on_path: VisitedSet::new(bounds),
        calls: 0,
    };

    for depth in 0..=bounds.len() {
        dls.observer.observe(Progress::Restart { depth });
        trace!("ids: depth limit {depth}, {} calls so far", dls.calls);

        dls.arena.truncate(0);
        let root = dls.arena.root(start, 0);
        if let Some(found) = dls.search(root, depth) {
            let path = dls.arena.reconstruct_path(found);
            return Ok(SearchOutcome::found(path, dls.calls));
        }
    }

    Ok(SearchOutcome::not_found(dls.calls))
}

/// State shared by the recursive calls of one IDS run.
///
/// The arena is used as a stack: it holds exactly the current
/// root-to-node chain, so `on_path` marks the same cells.
struct DepthLimited<'a, S: ?Sized, O: ?Sized> {
    space: &'a S,
    goal: Position,
    observer: &'a mut O,
    arena: NodeArena,
    on_path: VisitedSet,
    calls: usize,
}

impl<S, O> DepthLimited<'_, S, O>
where
    S: SearchSpace + ?Sized,
    O: Observer + ?Sized,
{
    fn search(&mut self, id: NodeId, limit: usize) -> Option<NodeId> {
        self.calls += 1;
        let node = *self.arena.get(id);
        if EXPANDED_CADENCE.hits(self.calls) {
            self.observer.observe(Progress::Expanded(&node));
        }

        if node.pos == self.goal {
            return Some(id);
        }
        if limit == 0 {
            return None;
        }

        self.on_path.insert(node.pos);
        let mark = self.arena.len();
        let space = self.space;
        for np in traversable(space, node.pos) {
            if self.on_path.contains(np) {
                continue;
            }
            let child = self.arena.child(id, np, node.g + 1, 0);
            if let Some(found) = self.search(child, limit - 1) {
                return Some(found);
            }
            self.arena.truncate(mark);
        }
        self.on_path.remove(node.pos);
        None
    }
}
