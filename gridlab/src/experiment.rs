use std::time::Instant;

use gridsearch_core::{OccupancyGrid, Position};
use gridsearch_paths::{Algorithm, Observer, SearchError};
use log::info;
use serde::Serialize;

/// Metrics of one timed search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub algorithm: Algorithm,
    /// Wall-clock time of the search alone, in milliseconds.
    pub time_ms: f64,
    pub nodes_explored: usize,
    /// Path steps, 0 when no path was found.
    pub cost: usize,
    pub found: bool,
    /// Whether the strategy guarantees a shortest path.
    pub optimal: bool,
    pub path: Option<Vec<Position>>,
}

impl RunRecord {
    /// One-line summary for the terminal.
    pub fn summary(&self) -> String {
        format!(
            "{:<26} time {:>9.4} ms  nodes {:>6}  cost {:>4}  {}",
            self.algorithm.name(),
            self.time_ms,
            self.nodes_explored,
            self.cost,
            if self.found {
                "goal found"
            } else {
                "no path found"
            }
        )
    }
}

/// Run `algorithm` on `grid` and time it.
///
/// The observer's own work is included in the measured time, so pass
/// [`NoObserver`](gridsearch_paths::NoObserver) for clean numbers.
pub fn run_experiment<O>(
    grid: &OccupancyGrid,
    start: Position,
    goal: Position,
    algorithm: Algorithm,
    observer: &mut O,
) -> Result<RunRecord, SearchError>
where
    O: Observer + ?Sized,
{
    let t0 = Instant::now();
    let outcome = algorithm.solve(grid, start, goal, observer)?;
    let time_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let record = RunRecord {
        algorithm,
        time_ms,
        nodes_explored: outcome.nodes_explored,
        cost: outcome.cost(),
        found: outcome.is_found(),
        optimal: algorithm.is_optimal(),
        path: outcome.path,
    };
    info!(
        "{}: {:.4} ms, {} nodes, cost {}",
        algorithm.short_name(),
        record.time_ms,
        record.nodes_explored,
        record.cost
    );
    Ok(record)
}
