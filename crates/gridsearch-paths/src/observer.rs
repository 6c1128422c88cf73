//! Progress hook for visualising a running search.
//!
//! Observers only watch: nothing they do can change which nodes a search
//! expands or what it returns. Calls arrive in processing order, on the
//! searching thread, at a cadence chosen by each strategy.

use crate::node::SearchNode;

/// What a search reports to its [`Observer`].
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// A node was taken from the frontier and accepted.
    Expanded(&'a SearchNode),
    /// A node was added to the frontier.
    Discovered(&'a SearchNode),
    /// Iterative deepening is about to restart from the root with a new
    /// depth limit. No particular node applies.
    Restart { depth: usize },
}

impl Progress<'_> {
    /// The node this event refers to, if any.
    pub fn node(&self) -> Option<&SearchNode> {
        match self {
            Progress::Expanded(n) | Progress::Discovered(n) => Some(n),
            Progress::Restart { .. } => None,
        }
    }
}

/// Receives [`Progress`] events during a search.
pub trait Observer {
    fn observe(&mut self, progress: Progress<'_>);
}

impl<F: FnMut(Progress<'_>)> Observer for F {
    fn observe(&mut self, progress: Progress<'_>) {
        self(progress)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl Observer for NoObserver {
    #[inline]
    fn observe(&mut self, _: Progress<'_>) {}
}

/// Fires on every `n`-th tick.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cadence(usize);

impl Cadence {
    pub(crate) const fn every(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn hits(self, count: usize) -> bool {
        self.0 != 0 && count % self.0 == 0
    }
}
