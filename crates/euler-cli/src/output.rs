//! Shared output layer for pretty/JSON parity across commands.
//!
//! Every command handler receives an [`OutputMode`] and a writer. Pretty
//! output mirrors a human reading a terminal; JSON emits one object per
//! graph on its own line so results can be streamed.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--json` flag
//! 2. `[output] format` in the config file → `"pretty"` | `"json"`
//! 3. Default: [`OutputMode::Pretty`]

use std::io::{self, Write};

use anyhow::{Result, bail};
use serde::Serialize;

use euler_core::{Graph, GraphError};

/// The output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Pretty,
    Json,
}

impl OutputMode {
    /// Resolve the mode from the `--json` flag and the configured format.
    pub fn resolve(cli_json: bool, configured: &str) -> Result<Self> {
        if cli_json {
            return Ok(Self::Json);
        }
        match configured.trim().to_ascii_lowercase().as_str() {
            "pretty" | "human" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format {other:?} (expected \"pretty\" or \"json\")"),
        }
    }
}

/// Everything reported about one accepted graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    pub label: String,
    pub vertices: usize,
    pub edges: usize,
    pub matrix: Vec<Vec<u32>>,
    pub connected: bool,
    pub has_euler_circuit: bool,
    pub explanation: String,
    pub circuit: Option<Vec<usize>>,
}

impl GraphReport {
    /// Run the feasibility check and, when it passes, build the circuit.
    pub fn analyze(label: impl Into<String>, graph: &Graph) -> Self {
        let feasibility = graph.feasibility();
        let circuit = if feasibility.is_feasible() {
            graph.euler_circuit().map(|walk| walk.as_slice().to_vec())
        } else {
            None
        };

        Self {
            label: label.into(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            matrix: graph.rows().map(<[u32]>::to_vec).collect(),
            connected: feasibility.connected,
            has_euler_circuit: feasibility.is_feasible(),
            explanation: feasibility.to_string(),
            circuit,
        }
    }
}

/// A graph that failed validation.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedReport {
    pub label: String,
    pub error: ErrorPayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: &'static str,
    pub message: &'static str,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl RejectedReport {
    pub fn new(label: impl Into<String>, err: &GraphError) -> Self {
        let code = err.code();
        Self {
            label: label.into(),
            error: ErrorPayload {
                code: code.code(),
                message: code.message(),
                detail: err.to_string(),
                hint: code.hint(),
            },
        }
    }
}

/// Render an accepted graph.
pub fn render_graph(w: &mut dyn Write, mode: OutputMode, report: &GraphReport) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json_line(w, report),
        OutputMode::Pretty => {
            writeln!(w, "{}", report.label)?;
            writeln!(
                w,
                "Graph has {} vertices, and {} edges.",
                report.vertices, report.edges
            )?;
            for row in &report.matrix {
                let cells: Vec<String> = row.iter().map(u32::to_string).collect();
                writeln!(w, "{}", cells.join(" "))?;
            }
            writeln!(w, "{}", report.explanation)?;
            if let Some(circuit) = &report.circuit {
                let vertices: Vec<String> = circuit.iter().map(usize::to_string).collect();
                writeln!(w, "Graph has the following Euler circuit:")?;
                writeln!(w, "{}", vertices.join(" "))?;
            }
            writeln!(w)
        }
    }
}

/// Render a rejected graph.
pub fn render_rejected(
    w: &mut dyn Write,
    mode: OutputMode,
    report: &RejectedReport,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json_line(w, report),
        OutputMode::Pretty => {
            writeln!(w, "{}", report.label)?;
            writeln!(w, "Error [{}]: {}", report.error.code, report.error.detail)?;
            if let Some(hint) = report.error.hint {
                writeln!(w, "Hint: {hint}")?;
            }
            writeln!(w)
        }
    }
}

fn write_json_line<T: Serialize>(w: &mut dyn Write, value: &T) -> io::Result<()> {
    let line = serde_json::to_string(value).map_err(io::Error::other)?;
    writeln!(w, "{line}")
}
