//! Euler-circuit feasibility (Euler's theorem).
//!
//! An undirected multigraph has an Euler circuit iff it is connected and
//! every vertex has even degree. A diagonal cell counts twice toward its
//! vertex degree, since each loop contributes two endpoints.

use std::fmt;

use tracing::debug;

use super::Graph;

/// A vertex whose degree is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OddVertex {
    pub vertex: usize,
    pub degree: u64,
}

/// Outcome of the feasibility check, with enough detail to explain it.
///
/// `Display` renders the human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feasibility {
    pub vertex_count: usize,
    pub connected: bool,
    /// Connected components, isolated vertices included.
    pub component_count: usize,
    /// Lowest-indexed odd-degree vertex, if any. The scan stops there.
    pub odd_vertex: Option<OddVertex>,
}

impl Feasibility {
    /// `true` iff the graph is connected and has no odd-degree vertex.
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        self.vertex_count > 0 && self.connected && self.odd_vertex.is_none()
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertex_count == 0 {
            return f.write_str("The graph is empty, so it has no Euler circuit.");
        }
        if self.is_feasible() {
            return f.write_str(
                "The graph has an Euler circuit since every vertex has even degree and the graph is connected.",
            );
        }

        f.write_str("This graph does not have any Euler circuit:")?;
        if !self.connected {
            write!(
                f,
                " it is split into {} connected components",
                self.component_count
            )?;
            if self.odd_vertex.is_some() {
                f.write_str(" and")?;
            }
        }
        if let Some(odd) = self.odd_vertex {
            write!(f, " vertex {} has odd degree {}", odd.vertex, odd.degree)?;
        }
        f.write_str(".")
    }
}

impl Graph {
    /// Degree of `vertex`: off-diagonal cells once, the diagonal twice.
    ///
    /// Out-of-range vertices have degree 0.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> u64 {
        if vertex >= self.vertex_count() {
            return 0;
        }
        self.row(vertex)
            .iter()
            .enumerate()
            .map(|(col, &count)| {
                let count = u64::from(count);
                if col == vertex { 2 * count } else { count }
            })
            .sum()
    }

    /// Lowest-indexed vertex with odd degree.
    ///
    /// Stops at the first hit; the order only affects how early it stops,
    /// never whether an odd vertex is found.
    #[must_use]
    pub fn first_odd_vertex(&self) -> Option<OddVertex> {
        (0..self.vertex_count())
            .map(|vertex| OddVertex {
                vertex,
                degree: self.degree(vertex),
            })
            .find(|odd| odd.degree % 2 == 1)
    }

    /// Return `true` iff the graph contains an Euler circuit.
    ///
    /// Checks parity first and only scans connectivity when every degree is
    /// even. The explanation is logged at debug level; use
    /// [`Graph::feasibility`] to get it as a value.
    #[must_use]
    pub fn has_euler_circuit(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        if let Some(odd) = self.first_odd_vertex() {
            debug!(vertex = odd.vertex, degree = odd.degree, "odd degree vertex, no Euler circuit");
            return false;
        }
        let connected = self.is_connected();
        debug!(connected, "all degrees even");
        connected
    }

    /// Full feasibility report, used to explain [`Graph::has_euler_circuit`].
    ///
    /// Runs in time proportional to the matrix size, whatever the edge
    /// multiplicities.
    #[must_use]
    pub fn feasibility(&self) -> Feasibility {
        let connected = self.is_connected();
        let component_count = if connected {
            1
        } else {
            self.component_count()
        };
        Feasibility {
            vertex_count: self.vertex_count(),
            connected,
            component_count,
            odd_vertex: self.first_odd_vertex(),
        }
    }
}
