use crate::{
    position::GridPosition,
    types::{Cost, NodeId},
};

/// Read-only view of a graph as consumed by the search algorithms.
///
/// Implementations may panic when given an id for which `contains_node` is false.
pub trait Graph {
    type AdjacentIterator<'a>: Iterator<Item = NodeId>
    where
        Self: 'a;

    fn node_count(&self) -> usize;

    fn connection_count(&self) -> usize;

    fn contains_node(&self, node_id: NodeId) -> bool;

    fn node_position(&self, node_id: NodeId) -> GridPosition;

    /// Nodes reachable from `node_id` through a connection with a non-zero cost.
    fn adjacent_nodes(&self, node_id: NodeId) -> Self::AdjacentIterator<'_>;

    /// Cost of the connection `from -> to`, 0 if there is none.
    fn cost_to_travel(&self, from: NodeId, to: NodeId) -> Cost;
}
