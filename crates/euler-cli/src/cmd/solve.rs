use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::{info, warn};

use euler_core::GraphReader;

use crate::output::{GraphReport, OutputMode, RejectedReport, render_graph, render_rejected};

/// Arguments for `euler solve`.
#[derive(Args, Debug, Default)]
pub struct SolveArgs {
    /// File of adjacency matrices; reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,
}

/// Execute `euler solve`.
///
/// Streams the input and reports each graph as soon as it is complete.
/// Rejected graphs are reported and skipped; a malformed token stream or a
/// failed read stops the run with an error after reporting it.
pub fn run_solve(args: &SolveArgs, output: OutputMode, w: &mut dyn Write) -> Result<()> {
    let input = open_input(args.file.as_ref())?;

    let mut accepted = 0_usize;
    let mut rejected = 0_usize;

    for (idx, item) in GraphReader::new(input).enumerate() {
        let label = format!("graph {}", idx + 1);
        match item {
            Ok(graph) => {
                accepted += 1;
                render_graph(w, output, &GraphReport::analyze(label, &graph))?;
                w.flush()?;
            }
            Err(err) => {
                rejected += 1;
                render_rejected(w, output, &RejectedReport::new(label.clone(), &err))?;
                w.flush()?;
                if err.is_terminal() {
                    warn!(%err, "stopped reading input");
                    bail!("{label}: {err}");
                }
            }
        }
    }

    info!(accepted, rejected, "solve complete");
    Ok(())
}

fn open_input(file: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}
