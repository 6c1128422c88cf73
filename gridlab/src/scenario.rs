//! The grid and endpoints a run searches.

use std::fs;
use std::path::Path;

use gridsearch_core::{Cell, OccupancyGrid, ObstacleGen, Position, TextMap};
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::{GridSource, RunConfig};
use crate::error::HarnessError;

/// A grid with its start and goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub grid: OccupancyGrid,
    pub start: Position,
    pub goal: Position,
}

impl Scenario {
    /// Build the scenario described by `config`.
    ///
    /// Explicit start and goal override map markers. Without either, a
    /// generated grid runs from its top-left to its bottom-right corner.
    pub fn load(config: &RunConfig) -> Result<Self, HarnessError> {
        match &config.source {
            GridSource::Empty { size } => {
                let grid = OccupancyGrid::new(*size, *size);
                Ok(Self::with_corners(grid, config.start, config.goal))
            }
            GridSource::Map(path) => {
                let text = fs::read_to_string(path)?;
                Self::from_map(&text, path, config.start, config.goal)
            }
            GridSource::Random {
                dims,
                density,
                seed,
            } => {
                let start = config.start.unwrap_or(Position::ZERO);
                let goal = config
                    .goal
                    .unwrap_or(Position::new(dims.rows - 1, dims.cols - 1));
                let mut generator =
                    ObstacleGen::new(dims.rows, dims.cols, SmallRng::seed_from_u64(*seed));
                let blocked = generator.scatter(*density, &[start, goal]);
                info!(
                    "generated {}x{} grid with seed {seed}: {blocked} blocked",
                    dims.rows, dims.cols
                );
                Ok(Self {
                    grid: generator.into_grid(),
                    start,
                    goal,
                })
            }
        }
    }

    /// Parse a text map read from `path`.
    pub fn from_map(
        text: &str,
        path: &Path,
        start: Option<Position>,
        goal: Option<Position>,
    ) -> Result<Self, HarnessError> {
        let map_err = |source| HarnessError::Map {
            path: path.to_path_buf(),
            source,
        };
        let map = TextMap::parse(text).map_err(map_err)?;
        let start = match start {
            Some(p) => p,
            None => map.require_start().map_err(map_err)?,
        };
        let goal = match goal {
            Some(p) => p,
            None => map.require_goal().map_err(map_err)?,
        };
        info!(
            "loaded {} ({}): {} blocked",
            path.display(),
            map.grid.bounds(),
            map.grid.count(Cell::Blocked)
        );
        Ok(Self {
            grid: map.grid,
            start,
            goal,
        })
    }

    fn with_corners(grid: OccupancyGrid, start: Option<Position>, goal: Option<Position>) -> Self {
        let corner = Position::new(grid.rows() - 1, grid.cols() - 1);
        Self {
            start: start.unwrap_or(Position::ZERO),
            goal: goal.unwrap_or(corner),
            grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dims;
    use gridsearch_core::MapError;

    #[test]
    fn default_is_open_twenty_by_twenty() {
        let s = Scenario::load(&RunConfig::default()).unwrap();
        assert_eq!(s.grid.rows(), 20);
        assert_eq!(s.grid.cols(), 20);
        assert_eq!(s.grid.count(Cell::Blocked), 0);
        assert_eq!(s.start, Position::ZERO);
        assert_eq!(s.goal, Position::new(19, 19));
    }

    #[test]
    fn random_is_seeded_and_keeps_endpoints_free() {
        let config = RunConfig {
            source: GridSource::Random {
                dims: Dims { rows: 12, cols: 9 },
                density: 0.9,
                seed: 42,
            },
            ..RunConfig::default()
        };
        let a = Scenario::load(&config).unwrap();
        let b = Scenario::load(&config).unwrap();
        assert_eq!(a, b);
        assert!(a.grid.is_traversable(a.start));
        assert!(a.grid.is_traversable(a.goal));
        assert_eq!(a.goal, Position::new(11, 8));
        assert!(a.grid.count(Cell::Blocked) > 0);
    }

    #[test]
    fn map_markers_and_overrides() {
        let text = "S..\n.#.\n..G\n";
        let path = Path::new("t.txt");
        let s = Scenario::from_map(text, path, None, None).unwrap();
        assert_eq!(s.start, Position::ZERO);
        assert_eq!(s.goal, Position::new(2, 2));

        let s = Scenario::from_map(text, path, Some(Position::new(0, 2)), None).unwrap();
        assert_eq!(s.start, Position::new(0, 2));
    }

    #[test]
    fn map_without_goal_is_an_error() {
        let err = Scenario::from_map("S..\n...", Path::new("t.txt"), None, None).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::Map {
                source: MapError::MissingMarker('G'),
                ..
            }
        ));
    }

    #[test]
    fn bundled_spiral_map() {
        let config = RunConfig {
            source: GridSource::Map(
                Path::new(env!("CARGO_MANIFEST_DIR")).join("../maps/spiral.txt"),
            ),
            ..RunConfig::default()
        };
        let s = Scenario::load(&config).unwrap();
        assert_eq!(s.start, Position::ZERO);
        assert_eq!(s.goal, Position::new(4, 4));
        let out = gridsearch_paths::Algorithm::Bfs
            .solve_quiet(&s.grid, s.start, s.goal)
            .unwrap();
        assert_eq!(out.cost(), 40);
    }

    #[test]
    fn missing_map_file_is_io_error() {
        let config = RunConfig {
            source: GridSource::Map("/nonexistent/gridlab/map.txt".into()),
            ..RunConfig::default()
        };
        assert!(matches!(Scenario::load(&config), Err(HarnessError::Io(_))));
    }
}
