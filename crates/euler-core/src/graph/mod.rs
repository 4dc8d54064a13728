//! Undirected multigraphs stored as adjacency matrices.
//!
//! # Overview
//!
//! A [`Graph`] owns a square matrix where cell `(i, j)` is the number of
//! parallel edges between vertices `i` and `j`. The matrix is validated once
//! at construction (non-negative, symmetric) and never mutated afterwards.
//! Self-loops live on the diagonal: a diagonal cell of `k` is `k` loops,
//! contributing `2k` to the vertex degree but only `k` to the edge count.
//!
//! ## Pipeline
//!
//! ```text
//! text input / random generator
//!        ↓  reader::GraphReader, Graph::random()
//! Graph (validated, immutable)
//!        ↓  Graph::feasibility()   connectivity + degree parity
//! Feasibility
//!        ↓  Graph::euler_circuit() (only when feasible)
//! Walk (closed, edge_count + 1 vertices)
//! ```
//!
//! Transient traversal state (visited sets, consumption matrices, pending
//! stacks) is created per call and never stored on the graph, so a shared
//! `&Graph` can be queried from anywhere.

pub mod connectivity;
pub mod feasibility;
pub mod random;
pub mod reader;

use std::fmt;

use crate::error::GraphError;

pub use feasibility::{Feasibility, OddVertex};
pub use reader::GraphReader;

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An undirected multigraph with self-loops, backed by an adjacency matrix.
///
/// `Graph::default()` is the empty graph with zero vertices. It stands in
/// for a rejected input: every query on it returns `false`, `0` or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    /// Row-major `vertex_count * vertex_count` edge multiplicities.
    cells: Vec<u32>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from `vertex_count` and a row-major list of cells.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a zero vertex count, a matrix
    /// size that overflows `usize`, a cell list of the wrong length, a
    /// negative (or oversized) cell in row-major order, then the first
    /// asymmetric pair scanning the upper triangle.
    pub fn from_cells(vertex_count: usize, cells: &[i64]) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }

        let expected = vertex_count
            .checked_mul(vertex_count)
            .ok_or(GraphError::TooLarge { vertex_count })?;
        if cells.len() != expected {
            return Err(GraphError::WrongCellCount {
                expected,
                actual: cells.len(),
            });
        }

        let mut converted = Vec::with_capacity(expected);
        for (idx, &value) in cells.iter().enumerate() {
            let (row, col) = (idx / vertex_count, idx % vertex_count);
            if value < 0 {
                return Err(GraphError::NegativeMultiplicity { row, col, value });
            }
            let cell = u32::try_from(value)
                .map_err(|_| GraphError::MultiplicityOverflow { row, col, value })?;
            converted.push(cell);
        }

        for row in 0..vertex_count {
            for col in row + 1..vertex_count {
                let forward = converted[row * vertex_count + col];
                let backward = converted[col * vertex_count + row];
                if forward != backward {
                    return Err(GraphError::Asymmetric {
                        row,
                        col,
                        forward,
                        backward,
                    });
                }
            }
        }

        Ok(Self::from_symmetric(vertex_count, converted))
    }

    /// Build a graph from a list of rows.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::from_cells`]; ragged rows are reported as
    /// [`GraphError::WrongCellCount`].
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, GraphError> {
        let vertex_count = rows.len();
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }
        if rows.iter().any(|row| row.len() != vertex_count) {
            return Err(GraphError::WrongCellCount {
                expected: vertex_count * vertex_count,
                actual: rows.iter().map(Vec::len).sum(),
            });
        }
        let cells: Vec<i64> = rows.iter().flatten().copied().collect();
        Self::from_cells(vertex_count, &cells)
    }

    /// Wrap cells already known to be symmetric.
    pub(crate) fn from_symmetric(vertex_count: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), vertex_count * vertex_count);
        let edge_count = (0..vertex_count)
            .flat_map(|row| (row..vertex_count).map(move |col| (row, col)))
            .map(|(row, col)| cells[row * vertex_count + col] as usize)
            .sum();
        Self {
            vertex_count,
            cells,
            edge_count,
        }
    }

    /// Number of vertices. Zero for the empty graph.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges; a self-loop counts once.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Return `true` for the zero-vertex graph.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Number of parallel edges between `source` and `dest`.
    ///
    /// Out-of-range indices yield 0 rather than panicking.
    #[must_use]
    pub fn edge_multiplicity(&self, source: usize, dest: usize) -> u32 {
        if source < self.vertex_count && dest < self.vertex_count {
            self.cells[source * self.vertex_count + dest]
        } else {
            0
        }
    }

    /// Row `vertex` of the adjacency matrix.
    pub(crate) fn row(&self, vertex: usize) -> &[u32] {
        let start = vertex * self.vertex_count;
        &self.cells[start..start + self.vertex_count]
    }

    /// The full row-major adjacency matrix.
    pub(crate) fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterate the adjacency matrix row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact(0) panics, so the empty graph yields nothing.
        self.cells.chunks_exact(self.vertex_count.max(1))
    }
}

impl fmt::Display for Graph {
    /// One matrix row per line, cells separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
