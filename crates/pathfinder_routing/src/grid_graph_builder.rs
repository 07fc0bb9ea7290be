use tracing::{debug, warn};

use crate::{
    base_graph::BaseGraph,
    graph::Graph,
    grid_map::GridMap,
    position::GridPosition,
    stopwatch::Stopwatch,
    types::NodeId,
};

/// The 8 surrounding cells, x-major.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A graph built from a [`GridMap`] together with the cell to node mapping.
#[derive(Debug, Clone)]
pub struct GridGraph {
    graph: BaseGraph,
    width: usize,
    height: usize,
    node_ids: Vec<Option<NodeId>>,
}

impl GridGraph {
    pub fn graph(&self) -> &BaseGraph {
        &self.graph
    }

    pub fn into_graph(self) -> BaseGraph {
        self.graph
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Node created for the cell, `None` for impassable or out of bounds cells.
    pub fn node_at(&self, x: i32, y: i32) -> Option<NodeId> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }

        self.node_ids[y as usize * self.width + x as usize]
    }

    pub fn position_of(&self, node_id: NodeId) -> Option<GridPosition> {
        self.graph
            .contains_node(node_id)
            .then(|| self.graph.node_position(node_id))
    }
}

/// Converts a [`GridMap`] into a graph with 8-directional adjacency.
///
/// Every passable cell becomes a node. Each node gets one directed connection
/// per passable neighbour, costing the neighbour's cell cost: moving
/// diagonally costs the same as moving orthogonally. This is what makes the
/// Chebyshev distance an admissible heuristic on the resulting graph; a
/// distance weighted diagonal cost would need an octile estimate instead.
pub struct GridGraphBuilder<'a> {
    grid: &'a GridMap,
    stopwatch: Stopwatch,
    skipped_connections: usize,
}

impl<'a> GridGraphBuilder<'a> {
    pub fn from_grid(grid: &'a GridMap) -> Self {
        Self {
            grid,
            stopwatch: Stopwatch::new("build_grid_graph"),
            skipped_connections: 0,
        }
    }

    pub fn build(mut self) -> GridGraph {
        self.stopwatch.start();

        let (mut graph, node_ids) = self.create_nodes();
        self.connect_nodes(&mut graph, &node_ids);

        self.stopwatch.stop();
        self.stopwatch.report();

        debug!(
            nodes = graph.node_count(),
            connections = graph.connection_count(),
            skipped = self.skipped_connections,
            "Built grid graph {}x{}",
            self.grid.width(),
            self.grid.height()
        );

        GridGraph {
            graph,
            width: self.grid.width(),
            height: self.grid.height(),
            node_ids,
        }
    }

    // Every node has to exist before the first connection references it.
    fn create_nodes(&self) -> (BaseGraph, Vec<Option<NodeId>>) {
        let grid = self.grid;
        let mut graph = BaseGraph::with_capacity(grid.passable_count());
        let mut node_ids = vec![None; grid.width() * grid.height()];

        for (x, y) in cells(grid) {
            if let Some(index) = grid.index(x, y).filter(|_| grid.is_passable(x, y)) {
                node_ids[index] = Some(graph.add_node(x, y));
            }
        }

        (graph, node_ids)
    }

    fn connect_nodes(&mut self, graph: &mut BaseGraph, node_ids: &[Option<NodeId>]) {
        let grid = self.grid;
        let node_at = |x: i32, y: i32| grid.index(x, y).and_then(|index| node_ids[index]);

        for (x, y) in cells(grid) {
            let Some(from_node) = node_at(x, y) else {
                continue;
            };

            for (dx, dy) in NEIGHBOR_OFFSETS {
                let (nx, ny) = (x + dx, y + dy);
                let (Some(to_node), Some(cost)) = (node_at(nx, ny), grid.cost(nx, ny)) else {
                    continue;
                };

                if let Err(err) = graph.add_connection(from_node, to_node, cost) {
                    warn!("Skipping connection ({x}, {y}) -> ({nx}, {ny}): {err}");
                    self.skipped_connections += 1;
                }
            }
        }
    }
}

/// Cell coordinates, row by row.
fn cells(grid: &GridMap) -> impl Iterator<Item = (i32, i32)> + use<> {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::GraphError, test_graph_utils::grid_from_rows};

    #[test]
    fn test_creates_node_per_passable_cell() {
        let grid = grid_from_rows(&["101", "111"]);
        let grid_graph = GridGraphBuilder::from_grid(&grid).build();

        assert_eq!(grid_graph.graph().node_count(), 5);
        assert_eq!(grid_graph.node_at(1, 0), None);
        assert_eq!(grid_graph.node_at(3, 0), None);
        assert_eq!(grid_graph.node_at(-1, 0), None);

        for (x, y) in [(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)] {
            let node_id = grid_graph.node_at(x, y).unwrap();
            assert_eq!(
                grid_graph.position_of(node_id),
                Some(GridPosition::new(x, y))
            );
        }
    }

    #[test]
    fn test_connection_count_matches_passable_neighbors() {
        let grid = grid_from_rows(&["11011", "10111", "11101", "01111"]);
        let grid_graph = GridGraphBuilder::from_grid(&grid).build();

        for node in grid_graph.graph().nodes() {
            let passable_neighbors = NEIGHBOR_OFFSETS
                .iter()
                .filter(|(dx, dy)| grid.is_passable(node.x() + dx, node.y() + dy))
                .count();

            assert_eq!(
                node.connections().len(),
                passable_neighbors,
                "node at ({}, {})",
                node.x(),
                node.y()
            );
        }
    }

    #[test]
    fn test_connection_cost_is_destination_cost() {
        let grid = grid_from_rows(&["12", "34"]);
        let grid_graph = GridGraphBuilder::from_grid(&grid).build();
        let graph = grid_graph.graph();

        let top_left = grid_graph.node_at(0, 0).unwrap();
        let top_right = grid_graph.node_at(1, 0).unwrap();
        let bottom_right = grid_graph.node_at(1, 1).unwrap();

        assert_eq!(graph.cost_to_travel(top_left, top_right), 2);
        assert_eq!(graph.cost_to_travel(top_right, top_left), 1);
        // Diagonal moves cost the destination cell, not a scaled distance
        assert_eq!(graph.cost_to_travel(top_left, bottom_right), 4);
        assert_eq!(graph.cost_to_travel(bottom_right, top_left), 1);
    }

    #[test]
    fn test_no_connection_towards_impassable_cells() {
        let grid = grid_from_rows(&["101"]);
        let grid_graph = GridGraphBuilder::from_grid(&grid).build();

        let left = grid_graph.node_at(0, 0).unwrap();
        let right = grid_graph.node_at(2, 0).unwrap();
        let graph = grid_graph.graph();

        assert_eq!(graph.adjacent_nodes(left).count(), 0);
        assert_eq!(graph.adjacent_nodes(right).count(), 0);
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_neighbor_order_is_x_major() {
        let grid = grid_from_rows(&["111", "111", "111"]);
        let grid_graph = GridGraphBuilder::from_grid(&grid).build();
        let center = grid_graph.node_at(1, 1).unwrap();

        let positions: Vec<(i32, i32)> = grid_graph
            .graph()
            .adjacent_nodes(center)
            .map(|node_id| {
                let position = grid_graph.position_of(node_id).unwrap();
                (position.x(), position.y())
            })
            .collect();

        assert_eq!(
            positions,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn test_position_of_unknown_node() {
        let grid = grid_from_rows(&["1"]);
        let grid_graph = GridGraphBuilder::from_grid(&grid).build();

        assert_eq!(grid_graph.position_of(1), None);
        assert_eq!(
            grid_graph.into_graph().node(1).unwrap_err(),
            GraphError::NodeNotFound(1)
        );
    }
}
