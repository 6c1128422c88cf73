use std::fmt;

use gridsearch_core::Position;

use crate::traits::SearchSpace;

/// Which endpoint of a query is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Precondition violations on search inputs.
///
/// An unreachable goal is not an error; see
/// [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The endpoint lies outside the grid.
    OutOfBounds { endpoint: Endpoint, pos: Position },
    /// The endpoint lies on a blocked cell.
    Blocked { endpoint: Endpoint, pos: Position },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { endpoint, pos } => {
                write!(f, "search: {endpoint} {pos} is outside the grid")
            }
            Self::Blocked { endpoint, pos } => {
                write!(f, "search: {endpoint} {pos} is on a blocked cell")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Check that both endpoints are in bounds and free.
pub(crate) fn validate<S: SearchSpace + ?Sized>(
    space: &S,
    start: Position,
    goal: Position,
) -> Result<(), SearchError> {
    for (endpoint, pos) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !space.bounds().contains(pos) {
            return Err(SearchError::OutOfBounds { endpoint, pos });
        }
        if !space.is_traversable(pos) {
            return Err(SearchError::Blocked { endpoint, pos });
        }
    }
    Ok(())
}
