use gridsearch_core::{Bounds, Position};

/// Flat membership set over the cells of a grid.
///
/// Positions outside the bounds are never members and cannot be inserted.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    bounds: Bounds,
    seen: Vec<bool>,
}

impl VisitedSet {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            seen: vec![false; bounds.len()],
        }
    }

    /// Mark `p`. Returns `true` if it was not already a member.
    #[inline]
    pub fn insert(&mut self, p: Position) -> bool {
        match self.bounds.index(p) {
            Some(i) if !self.seen[i] => {
                self.seen[i] = true;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn remove(&mut self, p: Position) {
        if let Some(i) = self.bounds.index(p) {
            self.seen[i] = false;
        }
    }

    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.index(p).is_some_and(|i| self.seen[i])
    }
}
