use clap::Parser;

#[cfg(not(feature = "dhat-heap"))]
use mimalloc::MiMalloc;

use crate::solve::SolveArgs;

mod map_file;
mod parsers;
mod render;
mod solve;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[cfg(not(feature = "dhat-heap"))]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Finds a least-cost path between the start and goal cells of a grid map
/// and writes it out as a diagram.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    solve: SolveArgs,

    #[arg(short, long, env = "PATHFINDER_DEBUG")]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    solve::run(cli.solve)
}
