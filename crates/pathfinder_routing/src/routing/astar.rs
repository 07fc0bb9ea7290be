use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use tracing::{debug, trace};

use crate::constants::DEFAULT_HEAP_CAPACITY;
use crate::error::SearchError;
use crate::graph::Graph;
use crate::stopwatch::Stopwatch;
use crate::types::{Cost, NodeId, PathCost};

use super::astar_heuristic::AStarHeuristic;
use super::frontier::{FrontierArena, FrontierEntry};
use super::routing_path::RoutingPath;
use super::shortest_path_algorithm::{
    CalcPathOptions, CalcPathResult, SearchBudget, ShortestPathAlgorithm, visited_positions,
};

// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,

    /// Arena index of the frontier entry this item was pushed for
    entry: usize,

    g_score: PathCost,

    f_score: PathCost,
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.g_score.cmp(&self.g_score))
            .then_with(|| other.node_id.cmp(&self.node_id))
            .then_with(|| other.entry.cmp(&self.entry))
    }
}

struct NodeData {
    settled: bool,
    weight: PathCost,
    entry: usize,
}

/// Estimates the remaining cost as the number of king moves to the goal.
///
/// Admissible as long as every move costs at least 1 whatever its direction,
/// which holds for graphs built by `GridGraphBuilder`.
pub struct ChebyshevHeuristic;

impl AStarHeuristic for ChebyshevHeuristic {
    #[inline(always)]
    fn estimate(&self, graph: &impl Graph, start: NodeId, end: NodeId) -> Cost {
        graph
            .node_position(start)
            .chebyshev_distance(&graph.node_position(end))
    }
}

/// A* over an open set ordered by `f = g + h`. A node whose cost improves is
/// pushed again and the outdated heap item is skipped when popped.
pub struct AStar<H: AStarHeuristic> {
    heap: BinaryHeap<HeapItem>,
    data: FxHashMap<NodeId, NodeData>,
    frontier: FrontierArena,

    debug_visited_nodes: Option<Vec<NodeId>>,

    heuristic: H,
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        AStar {
            heap: BinaryHeap::with_capacity(DEFAULT_HEAP_CAPACITY),
            data: FxHashMap::default(),
            frontier: FrontierArena::default(),
            debug_visited_nodes: None,
            heuristic,
        }
    }

    fn reset(&mut self) {
        self.heap.clear();
        self.data.clear();
        self.frontier.clear();
        self.debug_visited_nodes = None;
    }

    fn init(&mut self, graph: &impl Graph, start: NodeId, end: NodeId) {
        let h_score = self.heuristic.estimate(graph, start, end);
        self.push(FrontierEntry::new(start, 0, h_score, None));
    }

    fn push(&mut self, entry: FrontierEntry) {
        let index = self.frontier.push(entry);

        self.data.insert(
            entry.node_id,
            NodeData {
                settled: false,
                weight: entry.g_score,
                entry: index,
            },
        );

        self.heap.push(HeapItem {
            node_id: entry.node_id,
            entry: index,
            g_score: entry.g_score,
            f_score: entry.f_score,
        });
    }

    fn set_settled(&mut self, node: NodeId) {
        if let Some(data) = self.data.get_mut(&node) {
            data.settled = true;
        }
    }

    #[inline(always)]
    fn is_settled(&self, node: NodeId) -> bool {
        self.data.get(&node).is_some_and(|data| data.settled)
    }

    #[inline(always)]
    fn current_shortest_weight(&self, node: NodeId) -> Option<PathCost> {
        self.data.get(&node).map(|data| data.weight)
    }

    fn build_path(&self, end: NodeId) -> RoutingPath {
        match self.data.get(&end) {
            Some(data) if data.settled => RoutingPath::new(
                self.frontier.trace_path(data.entry),
                self.frontier.get(data.entry).g_score,
            ),
            _ => RoutingPath::default(),
        }
    }

    fn add_visited_node(&mut self, node: NodeId) {
        let debug_visited_nodes = self.debug_visited_nodes.get_or_insert_with(Vec::new);
        debug_visited_nodes.push(node);
    }
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for AStar<H> {
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        start: NodeId,
        end: NodeId,
        options: Option<CalcPathOptions>,
    ) -> Result<CalcPathResult, SearchError> {
        let mut stopwatch = Stopwatch::new("astar/calc_path");
        stopwatch.start();
        self.reset();

        let include_debug_info = options
            .as_ref()
            .and_then(|options| options.include_debug_info)
            .unwrap_or(false);
        let budget = SearchBudget::from_options(options.as_ref());

        if !graph.contains_node(start) || !graph.contains_node(end) {
            debug!(start, end, "AStar: start or end node is not in the graph");
            stopwatch.stop();
            return Ok(CalcPathResult {
                path: RoutingPath::default(),
                nodes_visited: 0,
                duration: stopwatch.total_duration(),
                debug: include_debug_info.then(|| visited_positions(graph, None)),
            });
        }

        self.init(graph, start, end);

        let mut nodes_visited = 0;

        while let Some(HeapItem {
            node_id, g_score, ..
        }) = self.heap.pop()
        {
            // Node is already settled, skip
            if self.is_settled(node_id) {
                continue;
            }

            // A cheaper item for this node was pushed after this one, skip
            if self
                .current_shortest_weight(node_id)
                .is_some_and(|weight| g_score > weight)
            {
                continue;
            }

            budget.check(nodes_visited, &stopwatch)?;

            if include_debug_info {
                self.add_visited_node(node_id);
            }

            nodes_visited += 1;
            self.set_settled(node_id);

            if node_id == end {
                break;
            }

            let parent = self.data[&node_id].entry;
            let current = self.frontier.get(parent);
            trace!(
                node_id,
                g = current.g_score,
                h = current.h_score,
                f = current.f_score,
                "Expanding"
            );

            for adj_node in graph.adjacent_nodes(node_id) {
                if self.is_settled(adj_node) {
                    continue;
                }

                let cost = graph.cost_to_travel(node_id, adj_node);
                let next_weight = g_score + PathCost::from(cost);

                // Unreached nodes have no weight yet
                if self
                    .current_shortest_weight(adj_node)
                    .is_none_or(|weight| next_weight < weight)
                {
                    let h_score = self.heuristic.estimate(graph, adj_node, end);
                    self.push(FrontierEntry::new(
                        adj_node,
                        next_weight,
                        h_score,
                        Some(parent),
                    ));
                }
            }
        }

        stopwatch.stop();
        stopwatch.report();

        let path = self.build_path(end);

        debug!(
            nodes_visited,
            path_len = path.len(),
            cost = path.cost(),
            "AStar finished"
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

impl AStar<ChebyshevHeuristic> {
    pub fn new() -> AStar<ChebyshevHeuristic> {
        Self::with_heuristic(ChebyshevHeuristic)
    }
}

impl Default for AStar<ChebyshevHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}
