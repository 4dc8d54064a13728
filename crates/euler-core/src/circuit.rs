//! Hierholzer-style Euler circuit construction.
//!
//! # Algorithm
//!
//! The builder walks from vertex 0, always taking the lowest-indexed edge
//! that has not been consumed yet, and pushes each vertex it leaves onto a
//! pending stack. When the frontier vertex has no unconsumed edge left, it
//! is a dead end: the frontier is emitted into the [`Walk`] and the most
//! recently pending vertex becomes the new frontier. This splices nested
//! sub-circuits into one trail.
//!
//! When a single pending vertex remains and every edge is consumed, the
//! frontier and that last pending vertex are emitted and the walk is
//! reversed. Vertices are emitted innermost sub-circuit first, so the
//! reversal is what turns the emission order into a start → … → start
//! sequence.
//!
//! The loop is iterative, so stack depth does not grow with edge count.
//!
//! # Precondition
//!
//! The graph must have an Euler circuit. [`Graph::euler_circuit`] checks
//! this first; calling [`CircuitBuilder::build`] directly on an infeasible
//! graph surfaces a [`CircuitError`].

use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::error::CircuitError;
use crate::graph::Graph;
use crate::walk::Walk;

/// The circuit always starts (and ends) here.
pub const START_VERTEX: usize = 0;

/// Single-use state for one circuit construction attempt.
///
/// Owns its consumption matrix and pending stack; the graph is only read.
pub struct CircuitBuilder<'g> {
    graph: &'g Graph,
    /// Row-major copy of the adjacency matrix, decremented per traversal.
    unconsumed: Vec<u32>,
    remaining_edges: usize,
    pending: Vec<usize>,
    current: usize,
    walk: Walk,
}

impl<'g> CircuitBuilder<'g> {
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            unconsumed: graph.cells().to_vec(),
            remaining_edges: graph.edge_count(),
            pending: Vec::with_capacity(graph.edge_count()),
            current: START_VERTEX,
            walk: Walk::new(graph.edge_count() + 1),
        }
    }

    /// Run the construction to completion.
    ///
    /// # Errors
    ///
    /// Returns a [`CircuitError`] when the graph has no Euler circuit: the
    /// pending stack drains with edges left over, the finished trail is not
    /// a closed walk over every edge, or some vertex is never visited.
    pub fn build(mut self) -> Result<Walk, CircuitError> {
        if self.graph.is_empty() {
            return Err(CircuitError::EmptyGraph);
        }

        if self.remaining_edges == 0 {
            // Degenerate circuit: the start vertex alone.
            self.emit(START_VERTEX)?;
        } else {
            loop {
                if self.pending.len() == 1 && self.remaining_edges == 0 {
                    self.close()?;
                    break;
                }

                match self.next_neighbor() {
                    Some(next) => self.traverse(next),
                    None => self.backtrack()?,
                }
            }
        }

        self.verify()?;
        debug!(
            edges = self.graph.edge_count(),
            length = self.walk.len(),
            "euler circuit built"
        );
        Ok(self.walk)
    }

    /// Lowest-indexed neighbor of the frontier with an unconsumed edge.
    fn next_neighbor(&self) -> Option<usize> {
        let n = self.graph.vertex_count();
        let start = self.current * n;
        self.unconsumed[start..start + n]
            .iter()
            .position(|&count| count > 0)
    }

    /// Consume one edge from the frontier to `next` and advance.
    fn traverse(&mut self, next: usize) {
        let n = self.graph.vertex_count();
        let from = self.current;
        trace!(from, to = next, remaining = self.remaining_edges, "traverse");

        self.pending.push(from);
        self.unconsumed[from * n + next] -= 1;
        if from != next {
            self.unconsumed[next * n + from] -= 1;
        }
        self.current = next;
        self.remaining_edges -= 1;
    }

    /// Dead end: emit the frontier and resume from the last pending vertex.
    fn backtrack(&mut self) -> Result<(), CircuitError> {
        trace!(vertex = self.current, "dead end");
        self.emit(self.current)?;
        self.current = self.pending.pop().ok_or(CircuitError::PendingUnderflow {
            vertex: self.current,
            remaining: self.remaining_edges,
        })?;
        Ok(())
    }

    /// Emit the frontier and the last pending vertex, then flip the walk.
    fn close(&mut self) -> Result<(), CircuitError> {
        let last = self.pending.pop().ok_or(CircuitError::PendingUnderflow {
            vertex: self.current,
            remaining: self.remaining_edges,
        })?;
        self.emit(self.current)?;
        self.emit(last)?;
        self.walk.reverse();
        Ok(())
    }

    fn emit(&mut self, vertex: usize) -> Result<(), CircuitError> {
        if self.walk.push(vertex) {
            Ok(())
        } else {
            Err(CircuitError::WrongLength {
                expected: self.walk.capacity(),
                actual: self.walk.len() + 1,
            })
        }
    }

    fn verify(&self) -> Result<(), CircuitError> {
        let expected = self.graph.edge_count() + 1;
        if self.walk.len() != expected {
            return Err(CircuitError::WrongLength {
                expected,
                actual: self.walk.len(),
            });
        }
        match (self.walk.first(), self.walk.last()) {
            (Some(first), Some(last)) if first != last => {
                return Err(CircuitError::NotClosed { first, last });
            }
            _ => {}
        }

        let n = self.graph.vertex_count();
        let mut seen = FixedBitSet::with_capacity(n);
        seen.extend(self.walk.iter());
        match (0..n).find(|&vertex| !seen.contains(vertex)) {
            Some(vertex) => Err(CircuitError::Unreached { vertex }),
            None => Ok(()),
        }
    }
}

impl Graph {
    /// Build an Euler circuit starting and ending at vertex 0.
    ///
    /// Returns `None` when [`Graph::has_euler_circuit`] is false. On success
    /// the walk has exactly `edge_count() + 1` vertices and uses every edge
    /// once.
    ///
    /// # Panics
    ///
    /// Panics if construction fails on a graph that passed the feasibility
    /// check, which would be a bug in the builder.
    #[must_use]
    pub fn euler_circuit(&self) -> Option<Walk> {
        if !self.has_euler_circuit() {
            return None;
        }
        let walk = CircuitBuilder::new(self)
            .build()
            .expect("a feasible graph always yields a closed circuit");
        Some(walk)
    }

    /// Check that `walk` is an Euler circuit of this graph: closed, every
    /// step follows an edge, each edge is used exactly as many times as its
    /// multiplicity, and every vertex is visited.
    #[must_use]
    pub fn accepts_circuit(&self, walk: &Walk) -> bool {
        let n = self.vertex_count();
        if n == 0 || walk.len() != self.edge_count() + 1 || !walk.is_closed() {
            return false;
        }
        if walk.iter().any(|v| v >= n) {
            return false;
        }
        let mut seen = FixedBitSet::with_capacity(n);
        seen.extend(walk.iter());
        if seen.count_ones(..) != n {
            return false;
        }

        let mut unused = self.cells().to_vec();
        for (from, to) in walk.steps() {
            if unused[from * n + to] == 0 {
                return false;
            }
            unused[from * n + to] -= 1;
            if from != to {
                unused[to * n + from] -= 1;
            }
        }
        unused.iter().all(|&count| count == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: &[Vec<i64>]) -> Graph {
        Graph::from_rows(rows).expect("valid graph")
    }

    fn circuit(rows: &[Vec<i64>]) -> Vec<usize> {
        graph(rows)
            .euler_circuit()
            .expect("graph has an euler circuit")
            .as_slice()
            .to_vec()
    }

    #[test]
    fn triangle_circuit() {
        assert_eq!(
            circuit(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]),
            vec![0, 1, 2, 0]
        );
    }

    #[test]
    fn single_self_loop() {
        assert_eq!(circuit(&[vec![1]]), vec![0, 0]);
    }

    #[test]
    fn lone_vertex_is_degenerate_circuit() {
        assert_eq!(circuit(&[vec![0]]), vec![0]);
    }

    #[test]
    fn double_edge() {
        assert_eq!(circuit(&[vec![0, 2], vec![2, 0]]), vec![0, 1, 0]);
    }

    #[test]
    fn bowtie_splices_second_triangle() {
        // Triangles 0-1-2 and 2-3-4 share vertex 2.
        let rows = vec![
            vec![0, 1, 1, 0, 0],
            vec![1, 0, 1, 0, 0],
            vec![1, 1, 0, 1, 1],
            vec![0, 0, 1, 0, 1],
            vec![0, 0, 1, 1, 0],
        ];
        assert_eq!(circuit(&rows), vec![0, 1, 2, 3, 4, 2, 0]);
        let g = graph(&rows);
        assert!(g.accepts_circuit(&g.euler_circuit().expect("circuit")));
    }

    #[test]
    fn loops_and_parallel_edges() {
        let rows = vec![vec![1, 2], vec![2, 1]];
        let g = graph(&rows);
        let walk = g.euler_circuit().expect("circuit");
        assert_eq!(walk.len(), 5);
        assert_eq!(walk.as_slice(), &[0, 0, 1, 1, 0]);
        assert!(g.accepts_circuit(&walk));
    }

    #[test]
    fn infeasible_graph_yields_none() {
        let path = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        assert!(path.euler_circuit().is_none());
        assert!(Graph::default().euler_circuit().is_none());
    }

    #[test]
    fn builder_reports_disconnected_precondition_violation() {
        // Two separate double edges: 0=1 and 2=3. Even degrees, disconnected.
        let g = graph(&[
            vec![0, 2, 0, 0],
            vec![2, 0, 0, 0],
            vec![0, 0, 0, 2],
            vec![0, 0, 2, 0],
        ]);
        let err = CircuitBuilder::new(&g).build().expect_err("should fail");
        assert!(matches!(err, CircuitError::PendingUnderflow { remaining: 2, .. }));
    }

    #[test]
    fn builder_reports_open_trail() {
        let path = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        let err = CircuitBuilder::new(&path).build().expect_err("should fail");
        assert_eq!(err, CircuitError::NotClosed { first: 0, last: 2 });
    }

    #[test]
    fn builder_rejects_empty_graph() {
        assert_eq!(
            CircuitBuilder::new(&Graph::default()).build(),
            Err(CircuitError::EmptyGraph)
        );
    }

    #[test]
    fn builder_rejects_edgeless_pair() {
        let g = graph(&[vec![0, 0], vec![0, 0]]);
        assert_eq!(
            CircuitBuilder::new(&g).build(),
            Err(CircuitError::Unreached { vertex: 1 })
        );
    }

    #[test]
    fn builder_rejects_isolated_vertex_beside_circuit() {
        // Triangle 0-1-2 is closed, vertex 3 has no edges.
        let g = graph(&[
            vec![0, 1, 1, 0],
            vec![1, 0, 1, 0],
            vec![1, 1, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(
            CircuitBuilder::new(&g).build(),
            Err(CircuitError::Unreached { vertex: 3 })
        );
    }

    #[test]
    fn builder_accepts_lone_vertex() {
        let g = graph(&[vec![0]]);
        let walk = CircuitBuilder::new(&g).build().expect("circuit");
        assert_eq!(walk.as_slice(), &[0]);
    }

    #[test]
    fn accepts_circuit_rejects_bad_walks() {
        let g = graph(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
        let good: Walk = "0 2 1 0".parse().expect("parse");
        assert!(g.accepts_circuit(&good));
        let reused: Walk = "0 1 0 1".parse().expect("parse");
        assert!(!g.accepts_circuit(&reused));
        let out_of_range: Walk = "0 1 5 0".parse().expect("parse");
        assert!(!g.accepts_circuit(&out_of_range));
        let short: Walk = "0 1 0".parse().expect("parse");
        assert!(!g.accepts_circuit(&short));
    }
}
