//! A rectangular occupancy grid of free and blocked cells.
//!
//! [`OccupancyGrid`] owns its cells in a flat row-major buffer. Searches take
//! it by shared reference, so the borrow checker rules out edits while a
//! search is running.

use std::fmt;

use crate::geom::{Bounds, Position};

/// Occupancy state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Blocked,
}

impl Cell {
    /// Whether a walker may enter this cell.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Cell::Free)
    }
}

/// A `rows × cols` grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    bounds: Bounds,
    cells: Vec<Cell>,
}

impl OccupancyGrid {
    /// Create a grid with every cell free.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            cells: vec![Cell::Free; bounds.len()],
        }
    }

    /// Create a free grid and then block every listed position.
    ///
    /// Out-of-bounds entries are ignored.
    pub fn with_blocked(rows: i32, cols: i32, blocked: &[Position]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &p in blocked {
            grid.set(p, Cell::Blocked);
        }
        grid
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Position) -> Option<Cell> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// True iff `p` is within bounds and free.
    #[inline]
    pub fn is_traversable(&self, p: Position) -> bool {
        self.at(p).is_some_and(Cell::is_free)
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if out of bounds.
    pub fn set(&mut self, p: Position, cell: Cell) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Flip the cell at `p` between free and blocked.
    pub fn toggle(&mut self, p: Position) -> Option<Cell> {
        let i = self.bounds.index(p)?;
        let next = match self.cells[i] {
            Cell::Free => Cell::Blocked,
            Cell::Blocked => Cell::Free,
        };
        self.cells[i] = next;
        Some(next)
    }

    /// Set every cell to `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Count cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Position, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for OccupancyGrid {
    /// `#` for blocked cells, `.` for free ones, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols() {
                let ch = match self.at(Position::new(row, col)) {
                    Some(Cell::Blocked) => '#',
                    _ => '.',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = OccupancyGrid::with_blocked(3, 3, &[Position::new(2, 0)]);
        let json = serde_json::to_string(&g).unwrap();
        let back: OccupancyGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
