//! Search strategies on occupancy grids.
//!
//! Seven interchangeable strategies share one contract: given a grid, a
//! start and a goal, return the path found (if any) and how many nodes were
//! explored.
//!
//! | Strategy | Frontier | Ordered by | Shortest path |
//! |---|---|---|---|
//! | [`bfs`] | FIFO queue | insertion | yes |
//! | [`dfs`] | LIFO stack | reverse insertion | no |
//! | [`ucs`] | priority queue | g | yes |
//! | [`ids`] | recursion, depth-limited | depth-first per limit | yes |
//! | [`greedy`] | priority queue | h | no |
//! | [`astar`] | priority queue | g + h | yes |
//! | [`hill_climbing`] | single current node | lowest h neighbor | no |
//!
//! h is the Manhattan distance to the goal. Priority queues are stable:
//! equal keys pop in insertion order. Neighbors are always expanded down,
//! right, up, left.
//!
//! [`Algorithm`] selects a strategy at run time. An [`Observer`] may watch
//! any run without affecting it.
//!
//! ```
//! use gridsearch_core::{OccupancyGrid, Position};
//! use gridsearch_paths::Algorithm;
//!
//! let grid = OccupancyGrid::new(5, 5);
//! let out = Algorithm::AStar
//!     .solve_quiet(&grid, Position::new(0, 0), Position::new(4, 4))
//!     .unwrap();
//! assert_eq!(out.cost(), 8);
//! ```

mod algorithm;
mod best_first;
mod bfs;
mod dfs;
mod error;
mod frontier;
mod hill_climbing;
mod ids;
mod neighbors;
mod node;
mod observer;
mod outcome;
mod traits;
mod visited;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use best_first::{astar, greedy, ucs};
pub use bfs::bfs;
pub use dfs::dfs;
pub use error::{Endpoint, SearchError};
pub use frontier::{PriorityFrontier, PriorityKey};
pub use hill_climbing::hill_climbing;
pub use ids::ids;
pub use neighbors::{Neighbors, neighbors};
pub use node::{NodeArena, NodeId, SearchNode};
pub use observer::{NoObserver, Observer, Progress};
pub use outcome::SearchOutcome;
pub use traits::SearchSpace;
pub use visited::VisitedSet;
