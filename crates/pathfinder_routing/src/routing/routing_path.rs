use crate::types::{NodeId, PathCost};

/// Ordered node ids from the start node to the goal node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutingPath {
    nodes: Vec<NodeId>,
    cost: PathCost,
}

impl RoutingPath {
    pub fn new(nodes: Vec<NodeId>, cost: PathCost) -> RoutingPath {
        RoutingPath { nodes, cost }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// Sum of the connection costs along the path.
    pub fn cost(&self) -> PathCost {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }
}
