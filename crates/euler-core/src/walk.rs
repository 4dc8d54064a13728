//! Walks: bounded, ordered vertex sequences.
//!
//! A [`Walk`] lists vertices in traversal order; edges are implied by
//! consecutive pairs. In a circuit the start vertex appears at both ends,
//! so a circuit over `m` edges holds `m + 1` vertices.

use std::fmt;
use std::str::FromStr;

/// An ordered list of vertex indices with a fixed capacity.
///
/// Appends and removals only happen at the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    capacity: usize,
    vertices: Vec<usize>,
}

impl Walk {
    /// Create an empty walk that can hold up to `capacity` vertices.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Maximum number of vertices this walk can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of vertices in the walk. A circuit counts its start twice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append `vertex`. Returns `false` (and leaves the walk untouched)
    /// when the walk is already at capacity.
    #[must_use = "a full walk silently drops the vertex"]
    pub fn push(&mut self, vertex: usize) -> bool {
        if self.vertices.len() == self.capacity {
            return false;
        }
        self.vertices.push(vertex);
        true
    }

    /// Remove and return the last vertex, or `None` if the walk is empty.
    pub fn pop_last(&mut self) -> Option<usize> {
        self.vertices.pop()
    }

    /// The `n`th vertex, counting from 0.
    ///
    /// `vertex_at(len())` wraps around to the first vertex, since a circuit
    /// closes on its start. Anything further out is `None`.
    #[must_use]
    pub fn vertex_at(&self, n: usize) -> Option<usize> {
        if n == self.vertices.len() {
            return self.vertices.first().copied();
        }
        self.vertices.get(n).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// `true` if the walk is non-empty and ends where it starts.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.vertices.is_empty() && self.first() == self.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.vertices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().copied()
    }

    /// Consecutive vertex pairs, i.e. the edges traversed.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Reverse the walk in place.
    pub(crate) fn reverse(&mut self) {
        self.vertices.reverse();
    }
}

impl fmt::Display for Walk {
    /// Vertices separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for vertex in &self.vertices {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{vertex}")?;
            first = false;
        }
        Ok(())
    }
}

/// Failure to parse a walk from its text rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid vertex {token:?} at position {position}")]
pub struct ParseWalkError {
    pub position: usize,
    pub token: String,
}

impl FromStr for Walk {
    type Err = ParseWalkError;

    /// Parse whitespace-separated vertex indices. Capacity equals the
    /// number of vertices read.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vertices = s
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| {
                token.parse::<usize>().map_err(|_| ParseWalkError {
                    position,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<usize>, _>>()?;
        Ok(Self {
            capacity: vertices.len(),
            vertices,
        })
    }
}

impl<'a> IntoIterator for &'a Walk {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter().copied()
    }
}
