//! Johnson's all-pairs shortest paths.
//!
//! 1. Add a virtual vertex with a zero-weight edge to every vertex.
//! 2. Bellman-Ford from it gives a potential `h[v]` per vertex and rejects
//!    graphs with a negative cycle anywhere.
//! 3. Reweight every edge to `w + h[u] - h[v]`, which is never negative.
//! 4. Run Dijkstra from every vertex on the reweighted matrix.
//! 5. Sum the original weights along each predecessor chain.

use pathgrid_common::types::{AdjacencyMatrix, DistanceMatrix, DistanceVector, VertexId, Weight};
use pathgrid_common::utils::error::Result;
use rayon::prelude::*;

use super::traits::{AlgorithmOutput, ShortestPathAlgorithm};
use super::{bellman_ford, dijkstra, present_edges};
use crate::config::Config;
use crate::graph::Graph;

/// Computes shortest distances between every ordered pair of vertices.
///
/// Cell `[v][u]` is the distance from `v` to `u`, `None` if unreachable. The
/// diagonal holds each vertex's self-loop weight.
///
/// Time complexity: O(V³).
///
/// # Errors
///
/// Returns `GraphError::NegativeCycle` (as `Error::InvalidGraph`) if the
/// graph contains a negative cycle.
///
/// # Examples
///
/// ```
/// use pathgrid_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.set(0, 1, Some(-1.0));
/// graph.set(1, 2, Some(2.0));
///
/// let dist = graph.johnson().unwrap();
/// assert_eq!(dist.row(0), &[Some(0.0), Some(-1.0), Some(1.0)]);
/// assert_eq!(dist.row(2), &[None, None, Some(0.0)]);
/// ```
pub fn johnson(matrix: &AdjacencyMatrix) -> Result<DistanceMatrix> {
    johnson_with_config(matrix, &Config::default())
}

/// [`johnson`] with explicit execution options.
///
/// With [`Config::use_parallel`] the per-source runs execute on the rayon
/// pool; the result is the same as the sequential run.
pub fn johnson_with_config(matrix: &AdjacencyMatrix, config: &Config) -> Result<DistanceMatrix> {
    let n = matrix.size();
    if n == 0 {
        return Ok(DistanceMatrix::new(0));
    }

    let parallel = config.use_parallel(n);
    tracing::debug!(vertices = n, parallel, "johnson");

    let potentials = potentials(matrix)?;
    let reweighted = reweight(matrix, &potentials);

    let rows: Vec<DistanceVector> = if parallel {
        (0..n)
            .into_par_iter()
            .map(|source| distances_from(matrix, &reweighted, source))
            .collect::<Result<_>>()?
    } else {
        (0..n)
            .map(|source| distances_from(matrix, &reweighted, source))
            .collect::<Result<_>>()?
    };

    DistanceMatrix::from_rows(rows)
}

/// Bellman-Ford from a virtual vertex joined to every vertex by a zero edge.
pub(crate) fn potentials(matrix: &AdjacencyMatrix) -> Result<Vec<Weight>> {
    let n = matrix.size();
    let mut augmented = AdjacencyMatrix::new(n + 1);
    for (u, v, w) in present_edges(matrix) {
        augmented[(u, v)] = Some(w);
    }
    for v in 0..=n {
        augmented[(n, v)] = Some(0.0);
    }

    let mut h = bellman_ford::relax_from(&augmented, n)?;
    h.truncate(n);
    Ok(h)
}

/// Applies `w + h[u] - h[v]` to every present cell.
fn reweight(matrix: &AdjacencyMatrix, h: &[Weight]) -> AdjacencyMatrix {
    let mut reweighted = AdjacencyMatrix::new(matrix.size());
    for (u, v, w) in present_edges(matrix) {
        reweighted[(u, v)] = Some(w + h[u] - h[v]);
    }
    reweighted
}

/// One row of the result: Dijkstra on the reweighted matrix, original weights summed.
fn distances_from(
    original: &AdjacencyMatrix,
    reweighted: &AdjacencyMatrix,
    source: VertexId,
) -> Result<DistanceVector> {
    let (_, predecessors) = dijkstra::search(reweighted, source)?;

    let mut row: DistanceVector = (0..original.size())
        .map(|target| {
            predecessors[target].map(|_| path_weight(original, &predecessors, target))
        })
        .collect();
    row[source] = original[(source, source)];
    Ok(row)
}

/// Sums original weights along the predecessor chain, source first.
///
/// The order matches the relaxation order of [`bellman_ford()`], so both agree
/// to the last bit.
fn path_weight(
    original: &AdjacencyMatrix,
    predecessors: &[Option<VertexId>],
    target: VertexId,
) -> Weight {
    let mut chain = vec![target];
    let mut current = target;
    while let Some(prev) = predecessors[current] {
        chain.push(prev);
        current = prev;
    }

    // predecessor links only follow present cells
    chain
        .windows(2)
        .rev()
        .filter_map(|pair| original[(pair[1], pair[0])])
        .fold(0.0, |total, w| total + w)
}

/// [`johnson`] behind the [`ShortestPathAlgorithm`] interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct JohnsonAlgorithm;

impl ShortestPathAlgorithm for JohnsonAlgorithm {
    fn name(&self) -> &'static str {
        "johnson"
    }

    fn requires_source(&self) -> bool {
        false
    }

    fn execute(
        &self,
        graph: &Graph,
        _source: Option<VertexId>,
        config: &Config,
    ) -> Result<AlgorithmOutput> {
        johnson_with_config(graph.matrix(), config).map(AlgorithmOutput::AllPairs)
    }
}
