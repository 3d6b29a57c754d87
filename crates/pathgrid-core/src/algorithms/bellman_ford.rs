//! Bellman-Ford single-source shortest paths.

use pathgrid_common::types::{AdjacencyMatrix, DistanceVector, VertexId, Weight};
use pathgrid_common::utils::error::{GraphError, Result};

use super::traits::{AlgorithmOutput, ShortestPathAlgorithm};
use super::{finish_distances, present_edges};
use crate::config::Config;
use crate::graph::Graph;

/// Computes shortest distances from `source`, allowing negative edge weights.
///
/// Every present cell is relaxed in up to `V - 1` full passes, then swept once
/// more. If that sweep still improves a distance the graph has a negative
/// cycle and no distances are returned.
///
/// Unreachable vertices are `None`. The entry for `source` is its self-loop
/// weight `matrix[source][source]`, not the zero the search starts from.
///
/// Time complexity: O(V³) on the dense matrix.
///
/// # Errors
///
/// Returns [`GraphError::NegativeCycle`] (as `Error::InvalidGraph`) when a
/// negative cycle exists.
///
/// # Panics
///
/// Panics if `source` is out of range for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use pathgrid_common::AdjacencyMatrix;
/// use pathgrid_core::bellman_ford;
///
/// let matrix = AdjacencyMatrix::from_rows(vec![
///     vec![Some(0.0), Some(5.0), None],
///     vec![None, Some(0.0), Some(-2.0)],
///     vec![None, None, Some(0.0)],
/// ])
/// .unwrap();
///
/// let dist = bellman_ford(&matrix, 0).unwrap();
/// assert_eq!(dist, vec![Some(0.0), Some(5.0), Some(3.0)]);
/// ```
pub fn bellman_ford(matrix: &AdjacencyMatrix, source: VertexId) -> Result<DistanceVector> {
    if matrix.is_empty() {
        return Ok(Vec::new());
    }

    let dist = relax_from(matrix, source)?;
    Ok(finish_distances(dist, matrix, source))
}

/// Runs the relaxation passes and the negative-cycle sweep.
///
/// Returns raw distances with `INFINITY` for unreachable vertices and zero at
/// the source.
pub(super) fn relax_from(matrix: &AdjacencyMatrix, source: VertexId) -> Result<Vec<Weight>> {
    let n = matrix.size();
    tracing::debug!(vertices = n, source, "bellman-ford");

    let mut dist = vec![Weight::INFINITY; n];
    dist[source] = 0.0;

    for pass in 1..n {
        let mut relaxed = 0usize;
        for (u, v, w) in present_edges(matrix) {
            if dist[u] + w < dist[v] {
                dist[v] = dist[u] + w;
                relaxed += 1;
            }
        }
        tracing::trace!(pass, relaxed, "relaxation pass");
        if relaxed == 0 {
            break;
        }
    }

    if let Some((u, v, _)) = present_edges(matrix).find(|&(u, v, w)| dist[u] + w < dist[v]) {
        tracing::debug!(from = u, to = v, "edge still relaxes after final pass");
        return Err(GraphError::NegativeCycle.into());
    }

    Ok(dist)
}

/// [`bellman_ford`] behind the [`ShortestPathAlgorithm`] interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordAlgorithm;

impl ShortestPathAlgorithm for BellmanFordAlgorithm {
    fn name(&self) -> &'static str {
        "bellman-ford"
    }

    fn requires_source(&self) -> bool {
        true
    }

    fn execute(
        &self,
        graph: &Graph,
        source: Option<VertexId>,
        _config: &Config,
    ) -> Result<AlgorithmOutput> {
        let source = self.check_source(graph, source)?;
        graph.bellman_ford(source).map(AlgorithmOutput::Distances)
    }
}
