use std::io::Write;

use anyhow::{Result, ensure};
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use euler_core::Graph;
use euler_core::config::RandomConfig;

use crate::output::{GraphReport, OutputMode, render_graph};

/// Arguments for `euler random`.
#[derive(Args, Debug, Default)]
pub struct RandomArgs {
    /// Vertices per generated graph (config: random.vertices).
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Sweep the parallel-edge bound over 1..=N (config: random.max_parallel).
    #[arg(long)]
    pub max_parallel: Option<u32>,

    /// Seed for reproducible graphs (config: random.seed).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute `euler random`.
///
/// Generates one graph per parallel-edge bound `1..=max_parallel` and
/// reports each one.
pub fn run_random(
    args: &RandomArgs,
    config: &RandomConfig,
    output: OutputMode,
    w: &mut dyn Write,
) -> Result<()> {
    let vertices = args.vertices.unwrap_or(config.vertices);
    let max_parallel = args.max_parallel.unwrap_or(config.max_parallel);
    ensure!(vertices > 0, "number of vertices must be positive");

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => {
            info!(seed, vertices, max_parallel, "random sweep");
            StdRng::seed_from_u64(seed)
        }
        None => {
            info!(vertices, max_parallel, "random sweep with entropy seed");
            StdRng::from_entropy()
        }
    };

    for max in 1..=max_parallel {
        let graph = Graph::random(vertices, max, &mut rng)?;
        let report = GraphReport::analyze(format!("random graph (max parallel edges {max})"), &graph);
        render_graph(w, output, &report)?;
    }

    Ok(())
}
