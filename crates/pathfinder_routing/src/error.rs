use std::time::Duration;

use thiserror::Error;

use crate::types::NodeId;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {0} not found in graph")]
    NodeNotFound(NodeId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Malformed grid: a {width}x{height} grid needs {expected} cells, got {actual}")]
    MalformedGrid {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Malformed grid: row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("Grid dimensions {width}x{height} exceed the addressable range")]
    TooLarge { width: usize, height: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search stopped after reaching the limit of {limit} expanded nodes")]
    IterationLimitExceeded { limit: usize },
    #[error("Search timed out after {elapsed:?} (limit {limit:?})")]
    Timeout { elapsed: Duration, limit: Duration },
}
