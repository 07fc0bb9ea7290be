pub mod base_graph;
pub mod connection;
pub mod constants;
pub mod error;
pub mod graph;
pub mod grid_graph_builder;
pub mod grid_map;
pub mod node;
pub mod position;
pub mod routing;
pub mod stopwatch;
pub mod types;

pub use routing::search;

#[cfg(test)]
pub(crate) mod test_graph_utils;
