use gridsearch_core::{Bounds, OccupancyGrid, Position};

/// Read-only view of a grid that searches run on.
pub trait SearchSpace {
    /// The rectangle every position must fall in.
    fn bounds(&self) -> Bounds;

    /// True iff `p` is in bounds and may be entered.
    fn is_traversable(&self, p: Position) -> bool;
}

impl SearchSpace for OccupancyGrid {
    #[inline]
    fn bounds(&self) -> Bounds {
        OccupancyGrid::bounds(self)
    }

    #[inline]
    fn is_traversable(&self, p: Position) -> bool {
        OccupancyGrid::is_traversable(self, p)
    }
}
