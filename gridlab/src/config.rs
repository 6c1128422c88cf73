//! Command line and the run configuration derived from it.

use std::path::PathBuf;

use clap::Parser;
use gridsearch_core::Position;
use gridsearch_paths::Algorithm;
use rand::RngExt;

use crate::error::HarnessError;

/// Side length of the grid used when neither `--map` nor `--random` is given.
pub const DEFAULT_SIZE: i32 = 20;
pub const DEFAULT_DENSITY: f64 = 0.25;
pub const DEFAULT_LOG: &str = "results/experiment_log.csv";
pub const DEFAULT_RESULTS: &str = "results";

/// Run, time and compare search strategies on a grid.
#[derive(Parser, Debug)]
#[command(name = "gridlab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text map: '.' free, '#' blocked, 'S' start, 'G' goal
    #[arg(long, value_name = "FILE", conflicts_with = "random")]
    pub map: Option<PathBuf>,

    /// Generate a random grid of the given size, e.g. 30x40
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_dims)]
    pub random: Option<Dims>,

    /// Fraction of cells blocked by --random
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Seed for --random
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell as ROW,COL (overrides the map's S marker)
    #[arg(long, value_name = "ROW,COL", value_parser = parse_position)]
    pub start: Option<Position>,

    /// Goal cell as ROW,COL (overrides the map's G marker)
    #[arg(long, value_name = "ROW,COL", value_parser = parse_position)]
    pub goal: Option<Position>,

    /// Strategy to run: bfs, dfs, ucs, ids, astar, greedy or hill (repeatable)
    #[arg(short, long = "algorithm", value_name = "NAME")]
    pub algorithms: Vec<Algorithm>,

    /// Run every strategy, including IDS on grids where it is skipped by default
    #[arg(long, conflicts_with = "algorithms")]
    pub all: bool,

    /// CSV file that results are appended to
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LOG)]
    pub log: PathBuf,

    /// Do not write the CSV log
    #[arg(long)]
    pub no_log: bool,

    /// Directory for grid snapshots and the comparison chart
    #[arg(long, value_name = "DIR", default_value = DEFAULT_RESULTS)]
    pub results: PathBuf,

    /// Do not write grid snapshots or the chart file
    #[arg(long)]
    pub no_save: bool,

    /// Print the grid with explored cells and path after each run
    #[arg(long)]
    pub render: bool,

    /// Redraw the grid while each search runs
    #[arg(long)]
    pub animate: bool,

    /// Print a bar chart comparing the runs
    #[arg(long)]
    pub chart: bool,

    /// Print the run records as JSON and nothing else
    #[arg(long, conflicts_with_all = ["render", "animate", "chart"])]
    pub json: bool,

    /// Log at info level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

/// Grid dimensions given as `ROWSxCOLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

fn parse_dims(s: &str) -> Result<Dims, String> {
    let (r, c) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got \u{201c}{s}\u{201d}"))?;
    let rows: i32 = r.trim().parse().map_err(|e| format!("rows: {e}"))?;
    let cols: i32 = c.trim().parse().map_err(|e| format!("cols: {e}"))?;
    if rows < 1 || cols < 1 {
        return Err(format!("grid must be at least 1x1, got {rows}x{cols}"));
    }
    Ok(Dims { rows, cols })
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = r.trim().parse().map_err(|e| format!("row: {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("col: {e}"))?;
    Ok(Position::new(row, col))
}

/// Where the grid comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum GridSource {
    /// Empty square grid.
    Empty { size: i32 },
    /// Parsed from a text map file.
    Map(PathBuf),
    /// Scattered obstacles.
    Random { dims: Dims, density: f64, seed: u64 },
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub source: GridSource,
    pub start: Option<Position>,
    pub goal: Option<Position>,
    pub algorithms: Vec<Algorithm>,
    /// Whether `algorithms` was named on the command line rather than
    /// defaulted to every strategy.
    pub explicit: bool,
    /// `None` disables the CSV log.
    pub log: Option<PathBuf>,
    /// `None` disables snapshot and chart files.
    pub results: Option<PathBuf>,
    pub render: bool,
    pub animate: bool,
    pub chart: bool,
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: GridSource::Empty { size: DEFAULT_SIZE },
            start: None,
            goal: None,
            algorithms: Algorithm::ALL.to_vec(),
            explicit: false,
            log: Some(PathBuf::from(DEFAULT_LOG)),
            results: Some(PathBuf::from(DEFAULT_RESULTS)),
            render: false,
            animate: false,
            chart: false,
            json: false,
        }
    }
}

impl TryFrom<Cli> for RunConfig {
    type Error = HarnessError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if !(0.0..=1.0).contains(&cli.density) {
            return Err(HarnessError::Config(format!(
                "density must be between 0 and 1, got {}",
                cli.density
            )));
        }

        let source = match (cli.map, cli.random) {
            (Some(path), _) => GridSource::Map(path),
            (None, Some(dims)) => GridSource::Random {
                dims,
                density: cli.density,
                seed: cli.seed.unwrap_or_else(|| rand::rng().random()),
            },
            (None, None) => GridSource::Empty { size: DEFAULT_SIZE },
        };

        let explicit = cli.all || !cli.algorithms.is_empty();
        let algorithms = if cli.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            let mut picked = Vec::with_capacity(cli.algorithms.len());
            for a in cli.algorithms {
                if !picked.contains(&a) {
                    picked.push(a);
                }
            }
            picked
        };

        Ok(Self {
            source,
            start: cli.start,
            goal: cli.goal,
            algorithms,
            explicit,
            log: (!cli.no_log).then_some(cli.log),
            results: (!cli.no_save).then_some(cli.results),
            render: cli.render || cli.animate,
            animate: cli.animate,
            chart: cli.chart,
            json: cli.json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Result<RunConfig, HarnessError> {
        let mut argv = vec!["gridlab"];
        argv.extend_from_slice(args);
        RunConfig::try_from(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults() {
        let c = config(&[]).unwrap();
        assert_eq!(c, RunConfig::default());
        assert!(!c.explicit);
    }

    #[test]
    fn all_runs_every_strategy_explicitly() {
        let c = config(&["--all"]).unwrap();
        assert_eq!(c.algorithms, Algorithm::ALL.to_vec());
        assert!(c.explicit);
    }

    #[test]
    fn random_grid_with_seed() {
        let c = config(&["--random", "30x40", "--density", "0.1", "--seed", "7"]).unwrap();
        assert_eq!(
            c.source,
            GridSource::Random {
                dims: Dims { rows: 30, cols: 40 },
                density: 0.1,
                seed: 7
            }
        );
    }

    #[test]
    fn algorithms_are_deduplicated_in_order() {
        let c = config(&["-a", "astar", "--algorithm", "BFS", "-a", "A*"]).unwrap();
        assert_eq!(c.algorithms, vec![Algorithm::AStar, Algorithm::Bfs]);
        assert!(c.explicit);
    }

    #[test]
    fn no_log_and_animate() {
        let c = config(&["--no-log", "--animate"]).unwrap();
        assert_eq!(c.log, None);
        assert_eq!(c.results, Some(PathBuf::from("results")));
        assert!(c.render);
    }

    #[test]
    fn results_dir() {
        let c = config(&["--results", "out/runs"]).unwrap();
        assert_eq!(c.results, Some(PathBuf::from("out/runs")));
        assert_eq!(config(&["--no-save"]).unwrap().results, None);
    }

    #[test]
    fn endpoints() {
        let c = config(&["--start", "1,2", "--goal", " 3 , 4 "]).unwrap();
        assert_eq!(c.start, Some(Position::new(1, 2)));
        assert_eq!(c.goal, Some(Position::new(3, 4)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Cli::try_parse_from(["gridlab", "--algorithm", "dijkstra"]).is_err());
        assert!(Cli::try_parse_from(["gridlab", "--random", "0x5"]).is_err());
        assert!(Cli::try_parse_from(["gridlab", "--random", "5"]).is_err());
        assert!(Cli::try_parse_from(["gridlab", "--map", "m.txt", "--random", "5x5"]).is_err());
        assert!(Cli::try_parse_from(["gridlab", "--all", "-a", "bfs"]).is_err());
        for other in ["--render", "--animate", "--chart"] {
            assert!(Cli::try_parse_from(["gridlab", "--json", other]).is_err(), "{other}");
        }
        assert!(matches!(
            config(&["--density", "1.5"]),
            Err(HarnessError::Config(_))
        ));
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
