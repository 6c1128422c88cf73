//! Random obstacle placement.
//!
//! [`ObstacleGen`] scatters blocked cells over an [`OccupancyGrid`] with a
//! caller-supplied RNG, so seeded generators reproduce the same layout.

use rand::{Rng, RngExt};

use crate::geom::Position;
use crate::grid::{Cell, OccupancyGrid};

/// Obstacle generator operating on an [`OccupancyGrid`].
pub struct ObstacleGen<R: Rng> {
    pub rng: R,
    pub grid: OccupancyGrid,
}

impl<R: Rng> ObstacleGen<R> {
    /// Create a generator over an all-free grid of the given size.
    pub fn new(rows: i32, cols: i32, rng: R) -> Self {
        Self::with_grid(OccupancyGrid::new(rows, cols), rng)
    }

    /// Create a generator over an existing grid.
    pub fn with_grid(grid: OccupancyGrid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Block each cell independently with probability `density`
    /// (clamped to 0.0–1.0). Cells listed in `keep_free` are left free.
    ///
    /// Returns the number of cells blocked.
    pub fn scatter(&mut self, density: f64, keep_free: &[Position]) -> usize {
        let density = density.clamp(0.0, 1.0);
        let mut blocked = 0;
        for p in self.grid.bounds() {
            if keep_free.contains(&p) {
                self.grid.set(p, Cell::Free);
                continue;
            }
            if self.rng.random_bool(density) {
                self.grid.set(p, Cell::Blocked);
                blocked += 1;
            }
        }
        blocked
    }

    /// Place exactly `n` blocked cells at distinct random free positions,
    /// never touching `keep_free`. Stops early if no free cell remains.
    ///
    /// Returns the number of cells blocked.
    pub fn place(&mut self, n: usize, keep_free: &[Position]) -> usize {
        let mut candidates: Vec<Position> = self
            .grid
            .iter()
            .filter(|&(p, c)| c.is_free() && !keep_free.contains(&p))
            .map(|(p, _)| p)
            .collect();
        let mut placed = 0;
        while placed < n && !candidates.is_empty() {
            let i = self.rng.random_range(0..candidates.len());
            let p = candidates.swap_remove(i);
            self.grid.set(p, Cell::Blocked);
            placed += 1;
        }
        placed
    }

    /// Consume the generator and return the grid.
    pub fn into_grid(self) -> OccupancyGrid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn scatter_keeps_protected_cells_free() {
        let keep = [Position::new(0, 0), Position::new(9, 9)];
        let mut g = ObstacleGen::new(10, 10, SmallRng::seed_from_u64(7));
        g.scatter(1.0, &keep);
        assert_eq!(g.grid.count(Cell::Blocked), 98);
        assert!(g.grid.is_traversable(keep[0]));
        assert!(g.grid.is_traversable(keep[1]));
    }

    #[test]
    fn scatter_zero_density_blocks_nothing() {
        let mut g = ObstacleGen::new(5, 5, SmallRng::seed_from_u64(1));
        assert_eq!(g.scatter(0.0, &[]), 0);
        assert_eq!(g.grid.count(Cell::Blocked), 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = ObstacleGen::new(12, 12, SmallRng::seed_from_u64(42));
        let mut b = ObstacleGen::new(12, 12, SmallRng::seed_from_u64(42));
        a.scatter(0.3, &[]);
        b.scatter(0.3, &[]);
        assert_eq!(a.into_grid(), b.into_grid());
    }

    #[test]
    fn place_exact_count() {
        let keep = [Position::new(2, 2)];
        let mut g = ObstacleGen::new(3, 3, SmallRng::seed_from_u64(3));
        assert_eq!(g.place(5, &keep), 5);
        assert_eq!(g.grid.count(Cell::Blocked), 5);
        assert!(g.grid.is_traversable(keep[0]));
        // Only three free non-protected cells remain.
        assert_eq!(g.place(10, &keep), 3);
    }
}
