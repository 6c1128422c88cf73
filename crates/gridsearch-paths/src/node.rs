use gridsearch_core::Position;

/// Index of a [`SearchNode`] inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Creation-order index of the node.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Per-cell search state.
///
/// `predecessor` is fixed at creation and only ever followed backwards, so
/// the nodes of one search form a tree rooted at the start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Position,
    /// Path cost from the start (g). Zero for strategies that ignore it.
    pub g: i32,
    /// Heuristic estimate to the goal (h). Zero when unused.
    pub h: i32,
    predecessor: Option<NodeId>,
}

impl SearchNode {
    /// Priority used by A*: f = g + h.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g + self.h
    }

    /// The node this one was expanded from, `None` for the start node.
    #[inline]
    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }
}

/// Append-only storage for the nodes created during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the start node.
    pub fn root(&mut self, pos: Position, h: i32) -> NodeId {
        self.push(SearchNode {
            pos,
            g: 0,
            h,
            predecessor: None,
        })
    }

    /// Add a node expanded from `parent`.
    pub fn child(&mut self, parent: NodeId, pos: Position, g: i32, h: i32) -> NodeId {
        self.push(SearchNode {
            pos,
            g,
            h,
            predecessor: Some(parent),
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node created after the first `len`.
    ///
    /// Only valid when no surviving node refers to a dropped one, which holds
    /// when the arena is used as a depth-first stack.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    /// Walk the predecessor chain from `goal` back to the root and return the
    /// positions in start-to-goal order.
    pub fn reconstruct_path(&self, goal: NodeId) -> Vec<Position> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(id) = cur {
            let node = self.get(id);
            path.push(node.pos);
            cur = node.predecessor;
        }
        path.reverse();
        path
    }
}
