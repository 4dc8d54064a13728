#![forbid(unsafe_code)]
//! euler-core library.
//!
//! Undirected multigraphs (parallel edges and self-loops) stored as
//! adjacency matrices, Euler-circuit feasibility via Euler's theorem, and
//! Hierholzer-style circuit construction.
//!
//! ```rust
//! use euler_core::Graph;
//!
//! let g = Graph::from_rows(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]])?;
//! assert!(g.has_euler_circuit());
//! let circuit = g.euler_circuit().expect("feasible");
//! assert_eq!(circuit.to_string(), "0 1 2 0");
//! # Ok::<(), euler_core::GraphError>(())
//! ```
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums for graph input and circuit construction;
//!   `anyhow::Result` for configuration plumbing.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod circuit;
pub mod config;
pub mod error;
pub mod graph;
pub mod walk;

pub use circuit::{CircuitBuilder, START_VERTEX};
pub use error::{CircuitError, ErrorCode, GraphError};
pub use graph::{Feasibility, Graph, GraphReader, OddVertex};
pub use walk::{ParseWalkError, Walk};
