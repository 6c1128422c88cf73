use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::{NodeArena, NodeId, SearchNode};

/// Extracts the priority of a node. Lower keys are popped first.
pub type PriorityKey = fn(&SearchNode) -> i32;

/// Heap entry ordered by `(key, seq)` so equal keys pop in insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    key: i32,
    seq: u64,
    id: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key, then oldest.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stable min-priority queue over arena nodes.
///
/// The same position may be pushed several times; callers discard stale
/// entries on pop (lazy deletion).
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    key: PriorityKey,
    seq: u64,
}

impl PriorityFrontier {
    pub fn new(key: PriorityKey) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key,
            seq: 0,
        }
    }

    pub fn push(&mut self, arena: &NodeArena, id: NodeId) {
        let key = (self.key)(arena.get(id));
        self.heap.push(Entry {
            key,
            seq: self.seq,
            id,
        });
        self.seq += 1;
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
