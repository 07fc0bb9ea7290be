use fxhash::FxHashSet;
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::graph::Graph;
use crate::stopwatch::Stopwatch;
use crate::types::{NodeId, PathCost};

use super::astar::ChebyshevHeuristic;
use super::astar_heuristic::AStarHeuristic;
use super::frontier::{FrontierArena, FrontierEntry};
use super::routing_path::RoutingPath;
use super::shortest_path_algorithm::{
    CalcPathOptions, CalcPathResult, SearchBudget, ShortestPathAlgorithm, visited_positions,
};

/// Open/closed list search that always expands the open entry with the lowest
/// accumulated cost `g`, the earliest discovered entry winning ties.
///
/// A node keeps the predecessor it was first discovered from: nodes already in
/// the open or closed list are never re-evaluated. On graphs where routes of
/// different costs converge on a node the returned path can therefore be more
/// expensive than the one found by [`super::astar::AStar`]. The heuristic is
/// computed and recorded on every entry but does not drive the expansion order.
pub struct OpenListAStar<H: AStarHeuristic> {
    /// Arena indices of the open entries, in discovery order
    open: Vec<usize>,
    open_nodes: FxHashSet<NodeId>,
    closed_nodes: FxHashSet<NodeId>,
    frontier: FrontierArena,

    debug_visited_nodes: Option<Vec<NodeId>>,

    heuristic: H,
}

impl<H: AStarHeuristic> OpenListAStar<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        OpenListAStar {
            open: Vec::new(),
            open_nodes: FxHashSet::default(),
            closed_nodes: FxHashSet::default(),
            frontier: FrontierArena::default(),
            debug_visited_nodes: None,
            heuristic,
        }
    }

    fn reset(&mut self) {
        self.open.clear();
        self.open_nodes.clear();
        self.closed_nodes.clear();
        self.frontier.clear();
        self.debug_visited_nodes = None;
    }

    fn add_to_open(&mut self, entry: FrontierEntry) {
        let index = self.frontier.push(entry);
        self.open.push(index);
        self.open_nodes.insert(entry.node_id);
    }

    /// Position in `open` of the entry with the lowest `g`.
    fn lowest_cost_position(&self) -> Option<usize> {
        let mut lowest: Option<(usize, FrontierEntry)> = None;

        for (position, &index) in self.open.iter().enumerate() {
            let entry = *self.frontier.get(index);
            if lowest.is_none_or(|(_, best)| entry.g_score < best.g_score) {
                lowest = Some((position, entry));
            }
        }

        lowest.map(|(position, _)| position)
    }

    fn move_to_closed(&mut self, position: usize) -> usize {
        let index = self.open.remove(position);
        let node_id = self.frontier.get(index).node_id;
        self.open_nodes.remove(&node_id);
        self.closed_nodes.insert(node_id);
        index
    }

    fn is_discovered(&self, node_id: NodeId) -> bool {
        self.open_nodes.contains(&node_id) || self.closed_nodes.contains(&node_id)
    }

    fn add_visited_node(&mut self, node: NodeId) {
        let debug_visited_nodes = self.debug_visited_nodes.get_or_insert_with(Vec::new);
        debug_visited_nodes.push(node);
    }
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for OpenListAStar<H> {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        start: NodeId,
        end: NodeId,
        options: Option<CalcPathOptions>,
    ) -> Result<CalcPathResult, SearchError> {
        let mut stopwatch = Stopwatch::new("open_list_astar/calc_path");
        stopwatch.start();
        self.reset();

        let include_debug_info = options
            .as_ref()
            .and_then(|options| options.include_debug_info)
            .unwrap_or(false);
        let budget = SearchBudget::from_options(options.as_ref());

        let mut nodes_visited = 0;
        let mut goal_entry = None;

        if graph.contains_node(start) && graph.contains_node(end) {
            let h_score = self.heuristic.estimate(graph, start, end);
            self.add_to_open(FrontierEntry::new(start, 0, h_score, None));
        } else {
            debug!(start, end, "OpenListAStar: start or end node is not in the graph");
        }

        while let Some(position) = self.lowest_cost_position() {
            budget.check(nodes_visited, &stopwatch)?;

            let current = *self.frontier.get(self.open[position]);

            if include_debug_info {
                self.add_visited_node(current.node_id);
            }
            nodes_visited += 1;

            if current.node_id == end {
                goal_entry = Some(self.open[position]);
                break;
            }

            trace!(
                node_id = current.node_id,
                g = current.g_score,
                h = current.h_score,
                f = current.f_score,
                "Expanding"
            );
            let parent = self.move_to_closed(position);

            for adj_node in graph.adjacent_nodes(current.node_id) {
                if self.is_discovered(adj_node) {
                    continue;
                }

                let cost = graph.cost_to_travel(current.node_id, adj_node);
                let g_score = current.g_score + PathCost::from(cost);
                let h_score = self.heuristic.estimate(graph, adj_node, end);

                self.add_to_open(FrontierEntry::new(adj_node, g_score, h_score, Some(parent)));
            }
        }

        stopwatch.stop();
        stopwatch.report();

        let path = goal_entry
            .map(|index| {
                RoutingPath::new(
                    self.frontier.trace_path(index),
                    self.frontier.get(index).g_score,
                )
            })
            .unwrap_or_default();

        debug!(
            nodes_visited,
            path_len = path.len(),
            cost = path.cost(),
            "OpenListAStar finished"
        );

        Ok(CalcPathResult {
            path,
            nodes_visited,
            duration: stopwatch.total_duration(),
            debug: include_debug_info
                .then(|| visited_positions(graph, self.debug_visited_nodes.as_deref())),
        })
    }
}

impl OpenListAStar<ChebyshevHeuristic> {
    pub fn new() -> Self {
        Self::with_heuristic(ChebyshevHeuristic)
    }
}

impl Default for OpenListAStar<ChebyshevHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}
