//! Common interface for the shortest-path algorithms.

use pathgrid_common::types::{DistanceMatrix, DistanceVector, VertexId};
use pathgrid_common::utils::error::{Error, Result};
use serde::Serialize;

use crate::config::Config;
use crate::graph::Graph;

/// Result of running a shortest-path algorithm.
///
/// Serializes as the bare vector or matrix, with `null` for unreachable cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AlgorithmOutput {
    /// Distances from one source vertex.
    Distances(DistanceVector),
    /// Distances between every ordered pair of vertices.
    AllPairs(DistanceMatrix),
}

impl AlgorithmOutput {
    /// Number of vertices the output covers.
    pub fn vertex_count(&self) -> usize {
        match self {
            AlgorithmOutput::Distances(dist) => dist.len(),
            AlgorithmOutput::AllPairs(matrix) => matrix.size(),
        }
    }
}

/// A shortest-path algorithm that can be selected at runtime.
pub trait ShortestPathAlgorithm: Send + Sync {
    /// Stable, kebab-case name.
    fn name(&self) -> &'static str;

    /// Whether [`execute`](Self::execute) needs a source vertex.
    fn requires_source(&self) -> bool;

    /// Runs the algorithm on `graph`.
    ///
    /// Single-source algorithms fail with [`Error::MissingSource`] or
    /// [`Error::VertexOutOfRange`] before touching the graph; all-pairs
    /// algorithms ignore `source`.
    fn execute(
        &self,
        graph: &Graph,
        source: Option<VertexId>,
        config: &Config,
    ) -> Result<AlgorithmOutput>;

    /// Validates `source` against `graph`.
    ///
    /// An empty graph accepts any source since there is nothing to index.
    fn check_source(&self, graph: &Graph, source: Option<VertexId>) -> Result<VertexId> {
        let source = source.ok_or(Error::MissingSource(self.name()))?;
        let vertex_count = graph.vertex_count();
        if vertex_count > 0 && source >= vertex_count {
            return Err(Error::VertexOutOfRange {
                vertex: source,
                vertex_count,
            });
        }
        Ok(source)
    }
}
