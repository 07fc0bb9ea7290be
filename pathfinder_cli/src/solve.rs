use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::{Args, ValueEnum};
use pathfinder_routing::{
    base_graph::BaseGraph,
    error::SearchError,
    graph::Graph,
    grid_graph_builder::GridGraphBuilder,
    routing::{
        astar::AStar,
        dijkstra::Dijkstra,
        open_list_astar::OpenListAStar,
        shortest_path_algorithm::{CalcPathOptions, CalcPathResult, ShortestPathAlgorithm},
    },
    types::NodeId,
};
use tracing::{info, warn};

use crate::{
    map_file::MapFile,
    parsers,
    render::{PathReport, render_ascii, render_json},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// A* ordered by f = g + h, with cost relaxation
    #[default]
    Astar,
    Dijkstra,
    /// Open/closed list search expanding the lowest accumulated cost first, without relaxation
    OpenList,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Ascii,
    Json,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// The map file to search
    #[arg(short, long, env = "PATHFINDER_MAP", default_value = "Map.txt")]
    pub map: PathBuf,

    /// File the result is written to
    #[arg(short, long, env = "PATHFINDER_OUTPUT", default_value = "Results.txt")]
    pub output: PathBuf,

    #[arg(short, long, value_enum, env = "PATHFINDER_ALGORITHM", default_value_t = Algorithm::Astar)]
    pub algorithm: Algorithm,

    /// Give up after expanding this many nodes
    #[arg(long, short = 'n', env = "PATHFINDER_MAX_ITERATIONS")]
    pub max_iterations: Option<usize>,

    /// Give up after this duration (e.g., "500ms", "5s", "PT1M")
    #[arg(short, long, value_parser = parsers::parse_duration, env = "PATHFINDER_TIMEOUT")]
    pub timeout: Option<jiff::SignedDuration>,

    #[arg(short, long, value_enum, env = "PATHFINDER_FORMAT", default_value_t = OutputFormat::Ascii)]
    pub format: OutputFormat,
}

fn calc_path(
    algorithm: Algorithm,
    graph: &BaseGraph,
    start: NodeId,
    goal: NodeId,
    options: CalcPathOptions,
) -> Result<CalcPathResult, SearchError> {
    match algorithm {
        Algorithm::Astar => AStar::new().calc_path(graph, start, goal, Some(options)),
        Algorithm::Dijkstra => Dijkstra::new().calc_path(graph, start, goal, Some(options)),
        Algorithm::OpenList => OpenListAStar::new().calc_path(graph, start, goal, Some(options)),
    }
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    info!("Reading map {:?}", args.map);
    let map = MapFile::from_file(&args.map)?;

    let grid_graph = GridGraphBuilder::from_grid(&map.grid).build();
    info!(
        "Graph: nodes = {}, connections = {}",
        grid_graph.graph().node_count(),
        grid_graph.graph().connection_count()
    );

    let timeout = args
        .timeout
        .map(Duration::try_from)
        .transpose()
        .context("The timeout must not be negative")?;

    let options = CalcPathOptions {
        include_debug_info: None,
        max_iterations: args.max_iterations,
        timeout,
    };

    let start = grid_graph.node_at(map.start.x(), map.start.y());
    let goal = grid_graph.node_at(map.goal.x(), map.goal.y());

    let (path, cost, nodes_visited) = match (start, goal) {
        (Some(start), Some(goal)) => {
            let result = calc_path(args.algorithm, grid_graph.graph(), start, goal, options)?;
            info!(
                "{:?} finished in {:?}: nodes visited = {}",
                args.algorithm, result.duration, result.nodes_visited
            );
            let cost = result.path.cost();
            (result.path.into_nodes(), cost, result.nodes_visited)
        }
        _ => {
            warn!("The start or goal cell cannot be entered");
            (Vec::new(), 0, 0)
        }
    };

    if path.is_empty() {
        info!("No path found");
    } else {
        info!("Path found: length = {}, cost = {}", path.len(), cost);
    }

    let content = match args.format {
        OutputFormat::Ascii => render_ascii(&map, &grid_graph, &path),
        OutputFormat::Json => render_json(&PathReport::new(
            &map,
            &grid_graph,
            &path,
            cost,
            nodes_visited,
        ))?,
    };

    if let Some(parent) = args.output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&args.output, content)
        .with_context(|| format!("Failed to write results to {:?}", args.output))?;

    info!("Completed!");

    Ok(())
}
