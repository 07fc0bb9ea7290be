use crate::types::{Cost, NodeId};

/// Directed connection owned by its source node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
    target: NodeId,
    cost: Cost,
}

impl Connection {
    pub fn new(target: NodeId, cost: Cost) -> Self {
        Connection { target, cost }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// A zero cost is the "no edge" marker, not a free move.
    pub fn is_traversable(&self) -> bool {
        self.cost > 0
    }
}
