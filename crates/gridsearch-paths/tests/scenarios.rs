use gridsearch_core::{Cell, OccupancyGrid, ObstacleGen, Position};
use gridsearch_paths::{Algorithm, NoObserver, Progress, SearchOutcome};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const OPTIMAL: [Algorithm; 4] = [
    Algorithm::Bfs,
    Algorithm::Ucs,
    Algorithm::AStar,
    Algorithm::Ids,
];

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

fn run(a: Algorithm, grid: &OccupancyGrid, start: Position, goal: Position) -> SearchOutcome {
    a.solve_quiet(grid, start, goal)
        .unwrap_or_else(|e| panic!("{a}: {e}"))
}

fn assert_valid_path(
    a: Algorithm,
    grid: &OccupancyGrid,
    path: &[Position],
    start: Position,
    goal: Position,
) {
    assert_eq!(path.first(), Some(&start), "{a}: path must begin at start");
    assert_eq!(path.last(), Some(&goal), "{a}: path must end at goal");
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{a}: {} -> {} is not a step", w[0], w[1]);
    }
    for &q in path {
        assert!(grid.is_traversable(q), "{a}: path crosses {q}");
    }
}

fn random_grid(
    rows: i32,
    cols: i32,
    density: f64,
    seed: u64,
    keep: &[Position],
) -> OccupancyGrid {
    let mut generator = ObstacleGen::new(rows, cols, SmallRng::seed_from_u64(seed));
    generator.scatter(density, keep);
    generator.into_grid()
}

#[test]
fn scenario_a_empty_five_by_five() {
    let grid = OccupancyGrid::new(5, 5);
    for a in OPTIMAL {
        let out = run(a, &grid, p(0, 0), p(4, 4));
        assert_eq!(out.cost(), 8, "{a}");
        let path = out.path.expect("path on empty grid");
        assert_eq!(path.len(), 9, "{a}");
        assert_valid_path(a, &grid, &path, p(0, 0), p(4, 4));
    }
}

#[test]
fn scenario_b_bfs_avoids_obstacles() {
    let blocked = [p(2, 2), p(2, 3), p(3, 2)];
    let grid = OccupancyGrid::with_blocked(5, 5, &blocked);
    let out = run(Algorithm::Bfs, &grid, p(0, 0), p(4, 4));
    assert_eq!(out.cost(), 8);
    let path = out.path.expect("BFS finds a way around the block");
    assert_valid_path(Algorithm::Bfs, &grid, &path, p(0, 0), p(4, 4));
    assert!(blocked.iter().all(|b| !path.contains(b)));
}

#[test]
fn scenario_b_every_complete_strategy_finds_a_path() {
    let grid = OccupancyGrid::with_blocked(5, 5, &[p(2, 2), p(2, 3), p(3, 2)]);
    for a in [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Ids,
        Algorithm::AStar,
        Algorithm::Greedy,
    ] {
        let out = run(a, &grid, p(0, 0), p(4, 4));
        let path = out.path.unwrap_or_else(|| panic!("{a} found no path"));
        assert_valid_path(a, &grid, &path, p(0, 0), p(4, 4));
    }
}

#[test]
fn scenario_c_start_is_goal() {
    let grid = OccupancyGrid::new(5, 5);
    for a in Algorithm::ALL {
        let out = run(a, &grid, p(2, 3), p(2, 3));
        assert_eq!(out.path, Some(vec![p(2, 3)]), "{a}");
        assert_eq!(out.nodes_explored, 1, "{a}");
        assert_eq!(out.cost(), 0, "{a}");
    }
}

#[test]
fn scenario_d_enclosed_goal() {
    // . . . .
    // . . . .
    // . . . #
    // . . # G
    let grid = OccupancyGrid::with_blocked(4, 4, &[p(2, 3), p(3, 2)]);
    for a in Algorithm::ALL {
        let out = run(a, &grid, p(0, 0), p(3, 3));
        assert_eq!(out.path, None, "{a}");
        assert!(out.nodes_explored >= 1, "{a}");
    }
}

#[test]
fn optimal_strategies_match_manhattan_on_open_grids() {
    for (rows, cols) in [(1, 6), (3, 4), (4, 4), (5, 3)] {
        let grid = OccupancyGrid::new(rows, cols);
        let cells: Vec<_> = grid.bounds().iter().collect();
        for &start in cells.iter().step_by(3) {
            for &goal in cells.iter().rev().step_by(2) {
                for a in OPTIMAL {
                    let out = run(a, &grid, start, goal);
                    assert_eq!(
                        out.cost() as i32,
                        start.manhattan(goal),
                        "{a} {rows}x{cols} {start} -> {goal}"
                    );
                }
            }
        }
    }
}

#[test]
fn astar_and_ucs_agree_on_random_grids() {
    for seed in 0..40 {
        let (start, goal) = (p(0, 0), p(9, 11));
        let grid = random_grid(10, 12, 0.3, seed, &[start, goal]);
        let bfs = run(Algorithm::Bfs, &grid, start, goal);
        let ucs = run(Algorithm::Ucs, &grid, start, goal);
        let astar = run(Algorithm::AStar, &grid, start, goal);
        assert_eq!(ucs.is_found(), astar.is_found(), "seed {seed}");
        assert_eq!(bfs.is_found(), astar.is_found(), "seed {seed}");
        assert_eq!(ucs.cost(), astar.cost(), "seed {seed}");
        assert_eq!(bfs.cost(), astar.cost(), "seed {seed}");
    }
}

#[test]
fn ids_is_optimal_on_small_random_grids() {
    for seed in 0..25 {
        let (start, goal) = (p(0, 0), p(3, 3));
        let grid = random_grid(4, 4, 0.25, seed, &[start, goal]);
        let bfs = run(Algorithm::Bfs, &grid, start, goal);
        let ids = run(Algorithm::Ids, &grid, start, goal);
        assert_eq!(bfs.path.is_some(), ids.path.is_some(), "seed {seed}");
        assert_eq!(bfs.cost(), ids.cost(), "seed {seed}");
        if let Some(path) = &ids.path {
            assert_valid_path(Algorithm::Ids, &grid, path, start, goal);
        }
    }
}

#[test]
fn returned_paths_are_valid() {
    for seed in 0..30 {
        let (start, goal) = (p(1, 0), p(6, 7));
        let grid = random_grid(7, 8, 0.25, seed, &[start, goal]);
        for a in Algorithm::ALL {
            if a == Algorithm::Ids {
                continue;
            }
            let out = run(a, &grid, start, goal);
            if let Some(path) = &out.path {
                assert_valid_path(a, &grid, path, start, goal);
            }
        }
    }
}

#[test]
fn frontier_searches_never_count_a_cell_twice() {
    for seed in 0..20 {
        let (start, goal) = (p(0, 0), p(7, 7));
        let grid = random_grid(8, 8, 0.2, seed, &[start, goal]);
        let free = grid.count(Cell::Free);
        for a in Algorithm::ALL {
            if a == Algorithm::Ids {
                continue;
            }
            let out = run(a, &grid, start, goal);
            assert!(out.nodes_explored >= 1, "{a}");
            assert!(out.nodes_explored <= free, "{a} seed {seed}");
        }
    }
}

#[test]
fn expanded_positions_are_distinct() {
    let grid = OccupancyGrid::with_blocked(6, 6, &[p(1, 1), p(2, 2), p(3, 3), p(4, 1)]);
    for a in [Algorithm::Dfs, Algorithm::HillClimbing] {
        let mut expanded = Vec::new();
        let mut obs = |progress: Progress<'_>| {
            if let Progress::Expanded(n) = progress {
                expanded.push(n.pos);
            }
        };
        a.solve(&grid, p(0, 0), p(5, 5), &mut obs).unwrap();
        let mut unique = expanded.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), expanded.len(), "{a}");
    }
}

#[test]
fn runs_are_deterministic() {
    let (start, goal) = (p(0, 0), p(5, 6));
    let grid = random_grid(6, 7, 0.25, 11, &[start, goal]);
    for a in Algorithm::ALL {
        let first = run(a, &grid, start, goal);
        let second = run(a, &grid, start, goal);
        assert_eq!(first, second, "{a}");
    }
}

#[test]
fn observer_does_not_change_outcome() {
    // S . . . . .
    // . # # . # .
    // . . . . . .
    // . . . # # .
    // . . . . . G
    let grid = OccupancyGrid::with_blocked(5, 6, &[p(1, 1), p(1, 2), p(1, 4), p(3, 3), p(3, 4)]);
    let (start, goal) = (p(0, 0), p(4, 5));
    for a in Algorithm::ALL {
        let mut events = 0usize;
        let mut obs = |_: Progress<'_>| events += 1;
        let watched = a.solve(&grid, start, goal, &mut obs).unwrap();
        let quiet = a.solve(&grid, start, goal, &mut NoObserver).unwrap();
        assert!(events > 0, "{a}");
        assert!(watched.is_found(), "{a}");
        assert!(watched.nodes_explored > 1, "{a}");
        assert_eq!(watched, quiet, "{a}");
    }
}

#[test]
fn hill_climbing_can_fail_where_bfs_succeeds() {
    let grid = OccupancyGrid::with_blocked(3, 5, &[p(1, 1), p(1, 2), p(1, 3), p(2, 1)]);
    let bfs = run(Algorithm::Bfs, &grid, p(0, 0), p(2, 2));
    let hill = run(Algorithm::HillClimbing, &grid, p(0, 0), p(2, 2));
    assert_eq!(bfs.cost(), 8);
    assert_eq!(hill.path, None);
}
