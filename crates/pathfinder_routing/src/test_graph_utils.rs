use crate::{
    base_graph::BaseGraph,
    grid_graph_builder::{GridGraph, GridGraphBuilder},
    grid_map::GridMap,
    types::{Cost, NodeId},
};

/// Parses rows of single digit costs, the first row being `y = 0`.
pub fn grid_from_rows(rows: &[&str]) -> GridMap {
    let rows = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| c.to_digit(10).expect("grid rows must be digits") as Cost)
                .collect()
        })
        .collect();

    GridMap::from_rows(rows).unwrap()
}

pub fn grid_graph(rows: &[&str]) -> GridGraph {
    GridGraphBuilder::from_grid(&grid_from_rows(rows)).build()
}

pub fn path_positions(grid_graph: &GridGraph, path: &[NodeId]) -> Vec<(i32, i32)> {
    path.iter()
        .map(|&node_id| {
            let position = grid_graph.position_of(node_id).unwrap();
            (position.x(), position.y())
        })
        .collect()
}

pub enum ConvergingNode {
    Start = 0,
    Near = 1,
    Cheap = 2,
    Goal = 3,
}

impl From<ConvergingNode> for usize {
    fn from(value: ConvergingNode) -> Self {
        value as usize
    }
}

/// Two routes converging on the goal. The route through `Near` is discovered
/// first but costs 11, the route through `Cheap` costs 3. All nodes share a
/// position so positional heuristics estimate 0.
pub fn create_converging_graph() -> BaseGraph {
    let mut graph = BaseGraph::new();

    for _ in 0..4 {
        graph.add_node(0, 0);
    }

    let connections = [
        (ConvergingNode::Start, ConvergingNode::Near, 1),
        (ConvergingNode::Start, ConvergingNode::Cheap, 2),
        (ConvergingNode::Near, ConvergingNode::Goal, 10),
        (ConvergingNode::Cheap, ConvergingNode::Goal, 1),
    ];

    for (from, to, cost) in connections {
        graph.add_connection(from.into(), to.into(), cost).unwrap();
    }

    graph
}
