#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use euler_core::config;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "euler: find Euler circuits in undirected multigraphs",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (unless EULER_LOG is set).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Config file (default: $EULER_CONFIG, then <config dir>/euler/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Check random multigraphs",
        long_about = "Generate one random multigraph per parallel-edge bound 1..=N and look for an Euler circuit in each.",
        after_help = "EXAMPLES:\n    # Six vertices, bounds 1 through 5\n    euler random\n\n    # Reproducible sweep\n    euler random --vertices 8 --max-parallel 3 --seed 42"
    )]
    Random(cmd::random::RandomArgs),

    #[command(
        about = "Check graphs read from a file or stdin",
        long_about = "Read adjacency matrices (vertex count, then n*n cells) and look for an Euler circuit in each.",
        after_help = "EXAMPLES:\n    # A triangle\n    echo '3  0 1 1  1 0 1  1 1 0' | euler solve\n\n    # Many graphs from a file, as JSON lines\n    euler solve graphs.txt --json"
    )]
    Solve(cmd::solve::SolveArgs),

    #[command(
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    euler completions bash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("EULER_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "euler=debug,info"
        } else {
            "euler=info,warn"
        })
    });

    let format = env::var("EULER_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Completions(args) = &cli.command {
        cmd::completions::run_completions(args, &mut Cli::command());
        return Ok(());
    }

    let config = config::resolve_config(cli.config.as_deref())?;
    let output = OutputMode::resolve(cli.json, &config.output.format)?;
    info!(?output, "starting");

    let stdout = io::stdout();
    let mut w = stdout.lock();

    let result = match &cli.command {
        Commands::Random(args) => cmd::random::run_random(args, &config.random, output, &mut w),
        Commands::Solve(args) => cmd::solve::run_solve(args, output, &mut w),
        Commands::Completions(_) => Ok(()),
    };

    w.flush()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["euler", "solve", "graphs.txt", "--json", "-v"])
            .expect("parse");
        assert!(cli.json);
        assert!(cli.verbose);
        match cli.command {
            Commands::Solve(args) => assert_eq!(args.file, Some(PathBuf::from("graphs.txt"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_random_overrides() {
        let cli = Cli::try_parse_from([
            "euler",
            "random",
            "--vertices",
            "4",
            "--max-parallel",
            "2",
            "--seed",
            "9",
        ])
        .expect("parse");
        match cli.command {
            Commands::Random(args) => {
                assert_eq!(args.vertices, Some(4));
                assert_eq!(args.max_parallel, Some(2));
                assert_eq!(args.seed, Some(9));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
