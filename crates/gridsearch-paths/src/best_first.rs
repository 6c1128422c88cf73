//! Priority-ordered searches: uniform-cost, greedy best-first and A*.
//!
//! All three share one loop and one [`PriorityFrontier`]; they differ only
//! in which of g and h they track and which one orders the queue.

use gridsearch_core::Position;

use crate::error::{SearchError, validate};
use crate::frontier::{PriorityFrontier, PriorityKey};
use crate::neighbors::Neighbors;
use crate::node::{NodeArena, SearchNode};
use crate::observer::{Cadence, Observer, Progress};
use crate::outcome::SearchOutcome;
use crate::traits::SearchSpace;
use crate::visited::VisitedSet;

fn by_cost(n: &SearchNode) -> i32 {
    n.g
}

fn by_estimate(n: &SearchNode) -> i32 {
    n.h
}

fn by_total(n: &SearchNode) -> i32 {
    n.f()
}

/// Bookkeeping for one priority-ordered strategy.
struct Scoring {
    key: PriorityKey,
    track_cost: bool,
    track_estimate: bool,
    cadence: Cadence,
}

const UNIFORM_COST: Scoring = Scoring {
    key: by_cost,
    track_cost: true,
    track_estimate: false,
    cadence: Cadence::every(10),
};

const GREEDY: Scoring = Scoring {
    key: by_estimate,
    track_cost: false,
    track_estimate: true,
    cadence: Cadence::every(5),
};

const ASTAR: Scoring = Scoring {
    key: by_total,
    track_cost: true,
    track_estimate: true,
    cadence: Cadence::every(5),
};

/// Uniform-cost search, ordered by path cost g.
///
/// With unit step costs this returns paths as short as BFS does.
pub fn ucs<S, O>(
    space: &S,
    start: Position,
    goal: Position,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError>
where
    S: SearchSpace + ?Sized,
    O: Observer + ?Sized,
{
    best_first(space, start, goal, observer, &UNIFORM_COST)
}

/// Greedy best-first search, ordered by the Manhattan estimate h alone.
///
/// g stays 0 on every node. Fast on open grids but not optimal.
pub fn greedy<S, O>(
    space: &S,
    start: Position,
    goal: Position,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError>
where
    S: SearchSpace + ?Sized,
    O: Observer + ?Sized,
{
    best_first(space, start, goal, observer, &GREEDY)
}

/// A* search, ordered by f = g + h with h the Manhattan distance.
///
/// Manhattan distance never overestimates on a 4-connected unit-cost grid,
/// so the returned path is shortest.
pub fn astar<S, O>(
    space: &S,
    start: Position,
    goal: Position,
    observer: &mut O,
) -> Result<SearchOutcome, SearchError>
where
    S: SearchSpace + ?Sized,
    O: Observer + ?Sized,
{
    best_first(space, start, goal, observer, &ASTAR)
}

fn best_first<S, O>(
    space: &S,
    start: Position,
    goal: Position,
    observer: &mut O,
    scoring: &Scoring,
) -> Result<SearchOutcome, SearchError>
where
    S: SearchSpace + ?Sized,
    O: Observer + ?Sized,
{
    validate(space, start, goal)?;

    let estimate = |p: Position| {
        if scoring.track_estimate {
            p.manhattan(goal)
        } else {
            0
        }
    };

    let mut arena = NodeArena::new();
    let mut visited = VisitedSet::new(space.bounds());
    let mut open = PriorityFrontier::new(scoring.key);
    let mut nb = Neighbors::new();

    let root = arena.root(start, estimate(start));
    open.push(&arena, root);
    let mut explored = 0;

    while let Some(id) = open.pop() {
        let current = *arena.get(id);
        // Stale duplicate of an already expanded position.
        if !visited.insert(current.pos) {
            continue;
        }
        explored += 1;
        if scoring.cadence.hits(explored) {
            observer.observe(Progress::Expanded(&current));
        }

        if current.pos == goal {
            return Ok(SearchOutcome::found(arena.reconstruct_path(id), explored));
        }

        let g = if scoring.track_cost { current.g + 1 } else { 0 };
        for &np in nb.expand(space, current.pos) {
            if visited.contains(np) {
                continue;
            }
            let child = arena.child(id, np, g, estimate(np));
            open.push(&arena, child);
        }
    }

    Ok(SearchOutcome::not_found(explored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoObserver;
    use gridsearch_core::OccupancyGrid;

    fn wall_grid() -> OccupancyGrid {
        // .....
        // .###.
        // .....
        OccupancyGrid::with_blocked(
            3,
            5,
            &[Position::new(1, 1), Position::new(1, 2), Position::new(1, 3)],
        )
    }

    #[test]
    fn ucs_is_optimal() {
        let g = wall_grid();
        let out = ucs(&g, Position::new(0, 2), Position::new(2, 2), &mut NoObserver)
            .unwrap();
        assert_eq!(out.cost(), 6);
    }

    #[test]
    fn astar_is_optimal() {
        let g = wall_grid();
        let out = astar(&g, Position::new(0, 2), Position::new(2, 2), &mut NoObserver)
            .unwrap();
        assert_eq!(out.cost(), 6);
    }

    #[test]
    fn astar_explores_fewer_nodes_than_ucs_on_open_grid() {
        let g = OccupancyGrid::new(10, 10);
        let (s, t) = (Position::new(0, 0), Position::new(0, 9));
        let a = astar(&g, s, t, &mut NoObserver).unwrap();
        let u = ucs(&g, s, t, &mut NoObserver).unwrap();
        assert_eq!(a.cost(), 9);
        assert_eq!(u.cost(), 9);
        // Only row 0 has f = 9; everything off it scores higher.
        assert_eq!(a.nodes_explored, 10);
        // UCS expands at least every cell with g <= 8 first.
        assert!(u.nodes_explored > 45);
    }

    #[test]
    fn greedy_keeps_cost_zero() {
        let g = OccupancyGrid::new(5, 5);
        let mut costs = Vec::new();
        let mut obs = |p: Progress<'_>| {
            if let Some(n) = p.node() {
                costs.push(n.g);
            }
        };
        let out = greedy(&g, Position::ZERO, Position::new(4, 4), &mut obs).unwrap();
        assert_eq!(out.cost(), 8);
        // On an open grid every step moves closer: exactly the path is expanded.
        assert_eq!(out.nodes_explored, 9);
        assert!(costs.iter().all(|&c| c == 0));
    }

    #[test]
    fn greedy_finds_path_around_wall() {
        let g = wall_grid();
        let out = greedy(&g, Position::new(0, 2), Position::new(2, 2), &mut NoObserver)
            .unwrap();
        assert!(out.is_found());
        assert!(out.cost() >= 6);
    }
}
