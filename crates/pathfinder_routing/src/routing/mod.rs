pub mod astar;
pub mod astar_heuristic;
pub mod dijkstra;
mod frontier;
pub mod open_list_astar;
pub mod routing_path;
pub mod shortest_path_algorithm;

use crate::{graph::Graph, types::NodeId};

use self::{astar::AStar, shortest_path_algorithm::ShortestPathAlgorithm};

/// Least-cost path from `start` to `goal` using A* with the Chebyshev heuristic.
///
/// The path is in start to goal order. It is empty when either id is unknown
/// or when the goal cannot be reached.
pub fn search(graph: &impl Graph, start: NodeId, goal: NodeId) -> Vec<NodeId> {
    AStar::new()
        .calc_path(graph, start, goal, None)
        .map(|result| result.path.into_nodes())
        .unwrap_or_default()
}
