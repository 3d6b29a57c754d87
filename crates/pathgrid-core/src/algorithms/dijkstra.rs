//! Dijkstra single-source shortest paths on the dense matrix.

use pathgrid_common::types::{AdjacencyMatrix, DistanceVector, VertexId, Weight};
use pathgrid_common::utils::error::{GraphError, Result};

use super::finish_distances;
use super::traits::{AlgorithmOutput, ShortestPathAlgorithm};
use crate::config::Config;
use crate::graph::Graph;

/// Result of [`dijkstra`].
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraResult {
    /// Source vertex of the search.
    pub source: VertexId,
    /// Distance to each vertex, `None` if unreachable.
    ///
    /// The source entry is its self-loop weight.
    pub distances: DistanceVector,
    /// Vertex preceding each vertex on its shortest path.
    ///
    /// `None` for the source and for unreachable vertices.
    pub predecessors: Vec<Option<VertexId>>,
}

impl DijkstraResult {
    /// Rebuilds the vertex sequence from the source to `target`, both included.
    ///
    /// Returns `None` if `target` is unreachable or out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathgrid_core::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// graph.set(0, 1, Some(1.0));
    /// graph.set(1, 2, Some(1.0));
    /// graph.set(0, 2, Some(5.0));
    ///
    /// let result = graph.dijkstra(0).unwrap();
    /// assert_eq!(result.path_to(2), Some(vec![0, 1, 2]));
    /// ```
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if target >= self.predecessors.len() {
            return None;
        }
        if target != self.source && self.predecessors[target].is_none() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes shortest distances and predecessors from `source`.
///
/// Vertices are settled in order of distance, selected by a linear scan over
/// the unvisited set (no heap, O(V²) overall). Every present cell in the row of
/// a settled vertex is checked: a negative weight aborts the search. Once only
/// unreachable vertices remain their rows are still checked, so any negative
/// edge in the matrix fails the call, on a shortest path or not.
///
/// Distances and the source entry follow the same conventions as
/// [`bellman_ford`](super::bellman_ford).
///
/// # Errors
///
/// Returns [`GraphError::NegativeEdge`] (as `Error::InvalidGraph`) for the
/// first negative edge scanned.
///
/// # Panics
///
/// Panics if `source` is out of range for a non-empty matrix.
pub fn dijkstra(matrix: &AdjacencyMatrix, source: VertexId) -> Result<DijkstraResult> {
    tracing::debug!(vertices = matrix.size(), source, "dijkstra");
    if matrix.is_empty() {
        return Ok(DijkstraResult {
            source,
            distances: Vec::new(),
            predecessors: Vec::new(),
        });
    }

    let (dist, predecessors) = search(matrix, source)?;
    Ok(DijkstraResult {
        source,
        distances: finish_distances(dist, matrix, source),
        predecessors,
    })
}

/// Raw search: distances with `INFINITY` for unreachable vertices, and predecessors.
pub(super) fn search(
    matrix: &AdjacencyMatrix,
    source: VertexId,
) -> Result<(Vec<Weight>, Vec<Option<VertexId>>)> {
    let n = matrix.size();
    tracing::trace!(vertices = n, source, "dijkstra search");

    let mut dist = vec![Weight::INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut visited = vec![false; n];
    dist[source] = 0.0;

    // min_by keeps the first minimum, so ties go to the lowest index
    while let Some(u) = (0..n)
        .filter(|&v| !visited[v])
        .min_by(|&a, &b| dist[a].total_cmp(&dist[b]))
    {
        if dist[u] == Weight::INFINITY {
            for v in (0..n).filter(|&v| !visited[v]) {
                check_row(matrix, v)?;
            }
            break;
        }

        visited[u] = true;
        for (v, weight) in matrix.row(u).iter().enumerate() {
            let Some(w) = *weight else { continue };
            if w < 0.0 {
                return Err(negative_edge(u, v, w));
            }
            if dist[u] + w < dist[v] {
                dist[v] = dist[u] + w;
                predecessors[v] = Some(u);
            }
        }
    }

    Ok((dist, predecessors))
}

fn check_row(matrix: &AdjacencyMatrix, u: VertexId) -> Result<()> {
    match matrix
        .row(u)
        .iter()
        .enumerate()
        .find_map(|(v, w)| match *w {
            Some(w) if w < 0.0 => Some((v, w)),
            _ => None,
        })
    {
        Some((v, w)) => Err(negative_edge(u, v, w)),
        None => Ok(()),
    }
}

fn negative_edge(from: VertexId, to: VertexId, weight: Weight) -> pathgrid_common::Error {
    tracing::debug!(from, to, weight, "negative edge");
    GraphError::NegativeEdge { from, to, weight }.into()
}

/// [`dijkstra`] behind the [`ShortestPathAlgorithm`] interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraAlgorithm;

impl ShortestPathAlgorithm for DijkstraAlgorithm {
    fn name(&self) -> &'static str {
        "dijkstra"
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
        graph
            .dijkstra(source)
            .map(|result| AlgorithmOutput::Distances(result.distances))
    }
}
