use gridsearch_core::Position;

/// Result of one search run.
///
/// A missing path is the normal failure signal: the goal was unreachable,
/// or hill climbing ran out of moves.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Start-to-goal positions, both inclusive.
    pub path: Option<Vec<Position>>,
    /// Positions accepted from the frontier (first time only), or recursive
    /// calls for iterative deepening.
    pub nodes_explored: usize,
}

impl SearchOutcome {
    pub fn found(path: Vec<Position>, nodes_explored: usize) -> Self {
        Self {
            path: Some(path),
            nodes_explored,
        }
    }

    pub fn not_found(nodes_explored: usize) -> Self {
        Self {
            path: None,
            nodes_explored,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Steps in the path, or 0 when none was found.
    pub fn cost(&self) -> usize {
        self.path.as_ref().map_or(0, |p| p.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_steps() {
        let o = SearchOutcome::found(vec![Position::new(0, 0), Position::new(0, 1)], 2);
        assert!(o.is_found());
        assert_eq!(o.cost(), 1);
        let single = SearchOutcome::found(vec![Position::ZERO], 1);
        assert_eq!(single.cost(), 0);
        let none = SearchOutcome::not_found(7);
        assert!(!none.is_found());
        assert_eq!(none.cost(), 0);
        assert_eq!(none.nodes_explored, 7);
    }
}
