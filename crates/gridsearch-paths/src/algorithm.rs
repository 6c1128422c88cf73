use std::fmt;
use std::str::FromStr;

use gridsearch_core::Position;
use log::debug;

use crate::error::SearchError;
use crate::observer::{NoObserver, Observer};
use crate::outcome::SearchOutcome;
use crate::traits::SearchSpace;
use crate::{astar, bfs, dfs, greedy, hill_climbing, ids, ucs};

/// The closed set of search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Ids,
    AStar,
    Greedy,
    HillClimbing,
}

impl Algorithm {
    /// Every strategy, in menu order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Ids,
        Algorithm::AStar,
        Algorithm::Greedy,
        Algorithm::HillClimbing,
    ];

    /// Long display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS (Breadth-First)",
            Algorithm::Dfs => "DFS (Depth-First)",
            Algorithm::Ucs => "UCS (Uniform-Cost)",
            Algorithm::Ids => "IDS (Iterative Deepening)",
            Algorithm::AStar => "A* Search (Manhattan)",
            Algorithm::Greedy => "Greedy Best-First",
            Algorithm::HillClimbing => "Hill Climbing",
        }
    }

    /// Short label for tables and charts.
    pub fn short_name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Ids => "IDS",
            Algorithm::AStar => "A*",
            Algorithm::Greedy => "Greedy",
            Algorithm::HillClimbing => "Hill",
        }
    }

    /// Command-line identifier, accepted by [`FromStr`].
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ucs => "ucs",
            Algorithm::Ids => "ids",
            Algorithm::AStar => "astar",
            Algorithm::Greedy => "greedy",
            Algorithm::HillClimbing => "hill",
        }
    }

    /// Whether the strategy always returns a shortest path on a unit-cost grid.
    pub fn is_optimal(self) -> bool {
        matches!(
            self,
            Algorithm::Bfs | Algorithm::Ucs | Algorithm::Ids | Algorithm::AStar
        )
    }

    /// Run the strategy from `start` to `goal`.
    ///
    /// Fails only if an endpoint is out of bounds or blocked.
    pub fn solve<S, O>(
        self,
        space: &S,
        start: Position,
        goal: Position,
        observer: &mut O,
    ) -> Result<SearchOutcome, SearchError>
    where
        S: SearchSpace + ?Sized,
        O: Observer + ?Sized,
    {
        debug!("{}: searching {start} -> {goal}", self.short_name());
        let outcome = match self {
            Algorithm::Bfs => bfs(space, start, goal, observer),
            Algorithm::Dfs => dfs(space, start, goal, observer),
            Algorithm::Ucs => ucs(space, start, goal, observer),
            Algorithm::Ids => ids(space, start, goal, observer),
            Algorithm::AStar => astar(space, start, goal, observer),
            Algorithm::Greedy => greedy(space, start, goal, observer),
            Algorithm::HillClimbing => hill_climbing(space, start, goal, observer),
        }?;
        debug!(
            "{}: {} after {} nodes",
            self.short_name(),
            if outcome.is_found() { "found" } else { "no path" },
            outcome.nodes_explored
        );
        Ok(outcome)
    }

    /// [`solve`](Self::solve) without an observer.
    pub fn solve_quiet<S>(
        self,
        space: &S,
        start: Position,
        goal: Position,
    ) -> Result<SearchOutcome, SearchError>
    where
        S: SearchSpace + ?Sized,
    {
        self.solve(space, start, goal, &mut NoObserver)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<_> = Algorithm::ALL.iter().map(|a| a.key()).collect();
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected one of: {})",
            self.0,
            keys.join(", ")
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the [`key`](Algorithm::key) or the short name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| {
                t.eq_ignore_ascii_case(a.key()) || t.eq_ignore_ascii_case(a.short_name())
            })
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}
