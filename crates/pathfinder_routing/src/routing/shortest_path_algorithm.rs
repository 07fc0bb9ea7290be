use std::time::Duration;

use crate::{
    error::SearchError,
    graph::Graph,
    position::GridPosition,
    stopwatch::Stopwatch,
    types::NodeId,
};

use super::routing_path::RoutingPath;

#[derive(Clone, Debug, Default)]
pub struct CalcPathOptions {
    pub include_debug_info: Option<bool>,

    /// Maximum number of nodes to expand before giving up.
    pub max_iterations: Option<usize>,

    pub timeout: Option<Duration>,
}

pub struct ShortestPathDebugInfo {
    /// Positions of the expanded nodes, in expansion order.
    pub visited_nodes: Vec<GridPosition>,
}

pub struct CalcPathResult {
    /// Empty when no path exists.
    pub path: RoutingPath,
    pub nodes_visited: usize,
    pub duration: Duration,
    pub debug: Option<ShortestPathDebugInfo>,
}

impl CalcPathResult {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

pub trait ShortestPathAlgorithm {
    /// Unknown start or end ids and unreachable goals give an empty path, not an error.
    /// Errors are reserved for the budgets set in `options`.
    fn calc_path(
        &mut self,
        graph: &impl Graph,
        start: NodeId,
        end: NodeId,
        options: Option<CalcPathOptions>,
    ) -> Result<CalcPathResult, SearchError>;
}

pub(crate) struct SearchBudget {
    max_iterations: Option<usize>,
    timeout: Option<Duration>,
}

impl SearchBudget {
    pub fn from_options(options: Option<&CalcPathOptions>) -> Self {
        SearchBudget {
            max_iterations: options.and_then(|options| options.max_iterations),
            timeout: options.and_then(|options| options.timeout),
        }
    }

    /// Called before each expansion with the number of nodes expanded so far.
    pub fn check(&self, iterations: usize, stopwatch: &Stopwatch) -> Result<(), SearchError> {
        if let Some(limit) = self.max_iterations
            && iterations >= limit
        {
            return Err(SearchError::IterationLimitExceeded { limit });
        }

        if let Some(limit) = self.timeout
            && let Some(elapsed) = stopwatch.exceeds(limit)
        {
            return Err(SearchError::Timeout { elapsed, limit });
        }

        Ok(())
    }
}

pub(crate) fn visited_positions(
    graph: &impl Graph,
    visited_nodes: Option<&[NodeId]>,
) -> ShortestPathDebugInfo {
    ShortestPathDebugInfo {
        visited_nodes: visited_nodes
            .unwrap_or_default()
            .iter()
            .map(|&node_id| graph.node_position(node_id))
            .collect(),
    }
}
