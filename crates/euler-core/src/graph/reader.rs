//! Text input: a stream of adjacency matrices.
//!
//! # Format
//!
//! Whitespace-separated integers. Each graph is a vertex count `n` followed
//! by `n * n` cells in row-major order; graphs follow one another until the
//! input ends. Line breaks carry no meaning.
//!
//! ```text
//! 3
//! 0 1 1
//! 1 0 1
//! 1 1 0
//! 1
//! 1
//! ```
//!
//! # Streaming
//!
//! [`GraphReader`] wraps any [`BufRead`] and pulls one line at a time, so a
//! graph is yielded as soon as the line holding its last cell arrives.
//! Interactive input is answered graph by graph instead of at end of input.
//!
//! # Errors
//!
//! Validation failures (non-positive count, negative cell, asymmetric
//! matrix) reject one graph and reading continues with the next. A
//! non-integer token, an input that ends mid-matrix or a failed read stops
//! the reader. A non-positive count is not followed by cells, so the next
//! token is read as the next graph's vertex count.

use std::collections::VecDeque;
use std::io::{BufRead, Lines};

use tracing::{debug, warn};

use super::Graph;
use crate::error::GraphError;

/// Iterator over the graphs in a text input.
pub struct GraphReader<R> {
    lines: Lines<R>,
    /// Tokens of the current line not consumed yet.
    pending: VecDeque<String>,
    position: usize,
    stopped: bool,
}

impl<R: BufRead> GraphReader<R> {
    #[must_use]
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            pending: VecDeque::new(),
            position: 0,
            stopped: false,
        }
    }

    fn next_token(&mut self) -> Option<Result<String, GraphError>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            match self.lines.next()? {
                Ok(line) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                Err(err) => {
                    return Some(Err(GraphError::Read {
                        position: self.position,
                        message: err.to_string(),
                    }));
                }
            }
        }
    }

    fn next_int(&mut self) -> Option<Result<i64, GraphError>> {
        let token = match self.next_token()? {
            Ok(token) => token,
            Err(err) => return Some(Err(err)),
        };
        let position = self.position;
        self.position += 1;
        Some(
            token
                .parse::<i64>()
                .map_err(|_| GraphError::InvalidToken { position, token }),
        )
    }

    fn read_graph(&mut self) -> Option<Result<Graph, GraphError>> {
        let count = match self.next_int()? {
            Ok(count) => count,
            Err(err) => return Some(Err(err)),
        };

        let vertex_count = match usize::try_from(count) {
            Ok(n) if n > 0 => n,
            _ => {
                warn!(count, "rejected graph: vertex count must be positive");
                return Some(Err(GraphError::NoVertices));
            }
        };

        let Some(expected) = vertex_count.checked_mul(vertex_count) else {
            return Some(Err(GraphError::Truncated {
                expected: usize::MAX,
                actual: 0,
            }));
        };

        let mut cells = Vec::with_capacity(expected.min(1 << 16));
        while cells.len() < expected {
            match self.next_int() {
                Some(Ok(value)) => cells.push(value),
                Some(Err(err)) => return Some(Err(err)),
                None => {
                    return Some(Err(GraphError::Truncated {
                        expected,
                        actual: cells.len(),
                    }));
                }
            }
        }

        let result = Graph::from_cells(vertex_count, &cells);
        match &result {
            Ok(graph) => debug!(
                vertices = graph.vertex_count(),
                edges = graph.edge_count(),
                "read graph"
            ),
            Err(err) => warn!(code = %err.code(), %err, "rejected graph"),
        }
        Some(result)
    }
}

impl<R: BufRead> Iterator for GraphReader<R> {
    type Item = Result<Graph, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        let item = self.read_graph()?;
        if item.as_ref().is_err_and(GraphError::is_terminal) {
            self.stopped = true;
        }
        Some(item)
    }
}
