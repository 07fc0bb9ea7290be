use crate::{
    graph::Graph,
    types::{Cost, NodeId},
};

pub trait AStarHeuristic {
    /// Estimated remaining cost from `start` to `end`. Must never be negative, and
    /// must not overestimate for the search to return least-cost paths.
    fn estimate(&self, graph: &impl Graph, start: NodeId, end: NodeId) -> Cost;
}
