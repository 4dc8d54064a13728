//! Connectivity checks over the adjacency matrix.
//!
//! [`Graph::is_connected`] runs a depth-first scan from vertex 0, following
//! any edge with multiplicity > 0 and breaking ties between neighbors in
//! ascending index order. The visited set lives in a [`Visitation`] created
//! for the call, so repeated or concurrent calls on a shared `&Graph` never
//! observe each other.
//!
//! [`Graph::component_count`] goes through petgraph instead and backs the
//! feasibility explanation. It exports one petgraph edge per adjacent
//! vertex pair, so its cost is bounded by the matrix size and not by edge
//! multiplicities. [`Graph::to_petgraph`] keeps every parallel edge and
//! serves as an independent oracle in tests.

use fixedbitset::FixedBitSet;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use super::Graph;

/// Per-call depth-first traversal state.
struct Visitation {
    visited: FixedBitSet,
    /// Each frame: (vertex, next column to inspect in its row).
    frames: Vec<(usize, usize)>,
    order: Vec<usize>,
}

impl Visitation {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: FixedBitSet::with_capacity(vertex_count),
            frames: Vec::new(),
            order: Vec::with_capacity(vertex_count),
        }
    }

    fn enter(&mut self, vertex: usize) {
        self.visited.insert(vertex);
        self.order.push(vertex);
        self.frames.push((vertex, 0));
    }

    /// Visit every vertex reachable from `start`.
    ///
    /// Iterative, but frames resume their row scan where they left off, so
    /// the visit order matches a recursive scan with ascending tie-break.
    fn run(&mut self, graph: &Graph, start: usize) {
        self.enter(start);
        while let Some(frame) = self.frames.last_mut() {
            let (vertex, next_col) = *frame;
            let row = graph.row(vertex);
            let found = (next_col..row.len()).find(|&col| row[col] != 0 && !self.visited[col]);
            match found {
                Some(col) => {
                    frame.1 = col + 1;
                    self.enter(col);
                }
                None => {
                    self.frames.pop();
                }
            }
        }
    }
}

impl Graph {
    /// Return `true` if every vertex is reachable from vertex 0.
    ///
    /// A single vertex is trivially connected. The empty graph is not.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.visit_order().len() == self.vertex_count()
    }

    /// Vertices reachable from vertex 0, in depth-first discovery order.
    ///
    /// Neighbors are explored lowest index first. Empty for the empty graph.
    #[must_use]
    pub fn visit_order(&self) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut visitation = Visitation::new(self.vertex_count());
        visitation.run(self, 0);
        visitation.order
    }

    /// Export to a petgraph undirected graph.
    ///
    /// Node weights are the vertex indices. Each unit of multiplicity
    /// becomes its own petgraph edge, self-loops included.
    #[must_use]
    pub fn to_petgraph(&self) -> UnGraph<usize, ()> {
        let n = self.vertex_count();
        let mut graph = UnGraph::<usize, ()>::with_capacity(n, self.edge_count());
        let nodes: Vec<NodeIndex> = (0..n).map(|v| graph.add_node(v)).collect();
        for (row, cells) in self.rows().enumerate() {
            for (col, &count) in cells.iter().enumerate().skip(row) {
                for _ in 0..count {
                    graph.add_edge(nodes[row], nodes[col], ());
                }
            }
        }
        graph
    }

    /// Export the adjacency structure only: one petgraph edge per pair of
    /// distinct vertices joined by at least one edge. Self-loops are dropped.
    #[must_use]
    pub fn to_petgraph_skeleton(&self) -> UnGraph<usize, ()> {
        let n = self.vertex_count();
        let mut graph = UnGraph::<usize, ()>::with_capacity(n, n);
        let nodes: Vec<NodeIndex> = (0..n).map(|v| graph.add_node(v)).collect();
        for (row, cells) in self.rows().enumerate() {
            for (col, &count) in cells.iter().enumerate().skip(row + 1) {
                if count > 0 {
                    graph.add_edge(nodes[row], nodes[col], ());
                }
            }
        }
        graph
    }

    /// Number of connected components, isolated vertices included.
    #[must_use]
    pub fn component_count(&self) -> usize {
        connected_components(&self.to_petgraph_skeleton())
    }
}
