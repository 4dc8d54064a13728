//! Random multigraph generation for demos and sweeps.
//!
//! Pass a seeded [`rand::rngs::StdRng`] for reproducible graphs.

use rand::Rng;

use super::Graph;
use crate::error::GraphError;

impl Graph {
    /// Generate a random multigraph.
    ///
    /// Every cell of the upper triangle, diagonal included, is drawn
    /// uniformly from `0..=max_parallel_edges` and mirrored, so the result
    /// is symmetric by construction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoVertices`] when `vertex_count` is zero and
    /// [`GraphError::TooLarge`] when the matrix size overflows `usize`.
    pub fn random<R: Rng + ?Sized>(
        vertex_count: usize,
        max_parallel_edges: u32,
        rng: &mut R,
    ) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }

        let size = vertex_count
            .checked_mul(vertex_count)
            .ok_or(GraphError::TooLarge { vertex_count })?;
        let mut cells = vec![0_u32; size];
        for row in 0..vertex_count {
            for col in row..vertex_count {
                let count = rng.gen_range(0..=max_parallel_edges);
                cells[row * vertex_count + col] = count;
                cells[col * vertex_count + row] = count;
            }
        }

        Ok(Self::from_symmetric(vertex_count, cells))
    }
}
