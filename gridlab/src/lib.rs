//! Experiment harness for the grid search strategies.
//!
//! Loads or generates a [`Scenario`], runs the chosen strategies on it,
//! prints their metrics and optionally the explored grid, keeps a
//! [`Comparison`] of the latest run per strategy, and appends every run to
//! a CSV [`ExperimentLog`]. Grid snapshots and the chart are also saved as
//! text under a [`ResultsDir`].

pub mod compare;
pub mod config;
pub mod error;
pub mod experiment;
pub mod journal;
pub mod render;
pub mod scenario;
pub mod snapshot;

use std::io::{self, Write};
use std::time::{Duration, SystemTime};

use gridsearch_paths::{Algorithm, NoObserver};
use log::{info, warn};

pub use compare::Comparison;
pub use config::{Cli, GridSource, RunConfig};
pub use error::HarnessError;
pub use experiment::{RunRecord, run_experiment};
pub use journal::ExperimentLog;
pub use render::{Animator, Overlay};
pub use scenario::Scenario;
pub use snapshot::ResultsDir;

/// Largest grid on which iterative deepening runs when it was not asked
/// for by name or with `--all`. Its cost grows exponentially with the path length.
pub const IDS_AUTO_CELLS: usize = 36;

pub const ANIMATION_DELAY: Duration = Duration::from_millis(15);

const CHART_WIDTH: usize = 40;

/// Run every configured strategy, writing reports to `out`.
///
/// Animation, when enabled, always draws on the terminal's stdout.
pub fn run_with<W: Write>(config: &RunConfig, out: &mut W) -> Result<Comparison, HarnessError> {
    let scenario = Scenario::load(config)?;
    info!(
        "{} grid, start {}, goal {}",
        scenario.grid.bounds(),
        scenario.start,
        scenario.goal
    );
    let journal = config.log.as_ref().map(ExperimentLog::new);
    let results = config.results.as_ref().map(ResultsDir::new);
    let mut comparison = Comparison::new();

    if config.render {
        render::legend(out)?;
    }

    for &algorithm in &config.algorithms {
        if algorithm == Algorithm::Ids
            && !config.explicit
            && scenario.grid.bounds().len() > IDS_AUTO_CELLS
        {
            warn!(
                "skipping {} on a {} grid; pass --algorithm ids or --all to run it anyway",
                algorithm.short_name(),
                scenario.grid.bounds()
            );
            continue;
        }

        let (record, overlay) = run_one(config, &scenario, algorithm)?;

        if !config.json {
            writeln!(out, "{}", record.summary())?;
        }
        if let Some(mut overlay) = overlay {
            if let Some(path) = &record.path {
                overlay.set_path(path);
            }
            if config.render {
                render::render(out, &scenario, &overlay)?;
                writeln!(out)?;
            }
            if let Some(results) = &results {
                let saved = results.save_grid(algorithm, &scenario, &overlay, SystemTime::now());
                if let Err(e) = saved {
                    warn!("could not write a snapshot to {}: {e}", results.path().display());
                }
            }
        }
        if let Some(journal) = &journal {
            if let Err(e) = journal.append(&record) {
                warn!("could not write {}: {e}", journal.path().display());
            }
        }
        comparison.record(record);
    }

    if config.chart {
        let chart = comparison.chart(CHART_WIDTH);
        writeln!(out)?;
        write!(out, "{chart}")?;
        if let Some(results) = &results {
            if let Err(e) = results.save_chart(&chart) {
                warn!("could not write the chart to {}: {e}", results.path().display());
            }
        }
    }
    if config.json {
        serde_json::to_writer_pretty(&mut *out, comparison.records())
            .map_err(io::Error::from)?;
        writeln!(out)?;
    }
    Ok(comparison)
}

/// Time one strategy, collecting an overlay when it will be drawn or saved.
fn run_one(
    config: &RunConfig,
    scenario: &Scenario,
    algorithm: Algorithm,
) -> Result<(RunRecord, Option<Overlay>), HarnessError> {
    let (start, goal) = (scenario.start, scenario.goal);
    if config.animate {
        let mut animator = Animator::new(scenario, io::stdout(), ANIMATION_DELAY)?;
        let record = run_experiment(&scenario.grid, start, goal, algorithm, &mut animator)?;
        Ok((record, Some(animator.finish()?)))
    } else if config.render || config.results.is_some() {
        let mut overlay = Overlay::new(scenario.grid.bounds());
        let record = run_experiment(&scenario.grid, start, goal, algorithm, &mut overlay)?;
        Ok((record, Some(overlay)))
    } else {
        let record = run_experiment(&scenario.grid, start, goal, algorithm, &mut NoObserver)?;
        Ok((record, None))
    }
}
