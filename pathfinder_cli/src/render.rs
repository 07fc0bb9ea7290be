use fxhash::FxHashSet;
use pathfinder_routing::{
    grid_graph_builder::GridGraph,
    position::GridPosition,
    types::{NodeId, PathCost},
};
use serde::Serialize;

use crate::map_file::MapFile;

const START: char = 'S';
const GOAL: char = 'G';
const OBSTACLE: char = 'X';
const PATH: char = 'v';
const FREE: char = 'o';

/// Draws the map one row per line, every cell followed by a space.
///
/// The start and goal cells are drawn even when they are impassable.
pub fn render_ascii(map: &MapFile, grid_graph: &GridGraph, path: &[NodeId]) -> String {
    let path_nodes: FxHashSet<NodeId> = path.iter().copied().collect();
    let width = map.grid.width() as i32;
    let height = map.grid.height() as i32;

    let mut output = String::with_capacity((map.grid.width() * 2 + 1) * map.grid.height());

    for y in 0..height {
        for x in 0..width {
            let position = GridPosition::new(x, y);

            let cell = if position == map.start {
                START
            } else if position == map.goal {
                GOAL
            } else if !map.grid.is_passable(x, y) {
                OBSTACLE
            } else if grid_graph
                .node_at(x, y)
                .is_some_and(|node_id| path_nodes.contains(&node_id))
            {
                PATH
            } else {
                FREE
            };

            output.push(cell);
            output.push(' ');
        }
        output.push('\n');
    }

    output
}

#[derive(Serialize, Debug)]
pub struct PathReport {
    pub found: bool,
    pub cost: PathCost,
    pub nodes_visited: usize,
    pub start: GridPosition,
    pub goal: GridPosition,
    pub path: Vec<GridPosition>,
}

impl PathReport {
    pub fn new(
        map: &MapFile,
        grid_graph: &GridGraph,
        path: &[NodeId],
        cost: PathCost,
        nodes_visited: usize,
    ) -> Self {
        PathReport {
            found: !path.is_empty(),
            cost,
            nodes_visited,
            start: map.start,
            goal: map.goal,
            path: path
                .iter()
                .filter_map(|&node_id| grid_graph.position_of(node_id))
                .collect(),
        }
    }
}

pub fn render_json(report: &PathReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use pathfinder_routing::{grid_graph_builder::GridGraphBuilder, search};

    use super::*;

    const SAMPLE: &str = "4\n3\n0\n0\n3\n0\n1 1 1 1\n1 0 0 1\n1 1 1 1\n";

    fn solve(map: &MapFile) -> (GridGraph, Vec<NodeId>) {
        let grid_graph = GridGraphBuilder::from_grid(&map.grid).build();
        let start = grid_graph.node_at(map.start.x(), map.start.y()).unwrap();
        let goal = grid_graph.node_at(map.goal.x(), map.goal.y()).unwrap();
        let path = search(grid_graph.graph(), start, goal);
        (grid_graph, path)
    }

    #[test]
    fn test_render_ascii() {
        let map = MapFile::parse(SAMPLE).unwrap();
        let (grid_graph, path) = solve(&map);

        assert_eq!(
            render_ascii(&map, &grid_graph, &path),
            "S v v G \no X X o \no o o o \n"
        );
    }

    #[test]
    fn test_render_ascii_without_path() {
        let map = MapFile::parse(SAMPLE).unwrap();
        let grid_graph = GridGraphBuilder::from_grid(&map.grid).build();

        assert_eq!(
            render_ascii(&map, &grid_graph, &[]),
            "S o o G \no X X o \no o o o \n"
        );
    }

    #[test]
    fn test_render_json() {
        let map = MapFile::parse(SAMPLE).unwrap();
        let (grid_graph, path) = solve(&map);

        let report = PathReport::new(&map, &grid_graph, &path, 3, 4);
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert_eq!(json["found"], true);
        assert_eq!(json["cost"], 3);
        assert_eq!(json["path"].as_array().unwrap().len(), 4);
        assert_eq!(json["path"][0], serde_json::json!({ "x": 0, "y": 0 }));
        assert_eq!(json["goal"], serde_json::json!({ "x": 3, "y": 0 }));
    }
}
