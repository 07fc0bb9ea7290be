use super::{astar::AStar, astar_heuristic::AStarHeuristic};
use crate::{
    graph::Graph,
    types::{Cost, NodeId},
};

pub struct DijkstraHeuristic;

impl AStarHeuristic for DijkstraHeuristic {
    #[inline(always)]
    fn estimate(&self, _graph: &impl Graph, _start: NodeId, _end: NodeId) -> Cost {
        0
    }
}

pub struct Dijkstra;

/// Dijkstra is simply a variant of AStar with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> AStar<DijkstraHeuristic> {
        AStar::with_heuristic(DijkstraHeuristic)
    }
}
