//! Shortest-path algorithms over adjacency matrices.
//!
//! All algorithms take the matrix (and a source where needed) as explicit
//! parameters and return freshly allocated results. Nothing is cached
//! between calls.
//!
//! ## Algorithms
//!
//! - [`bellman_ford`] - Single source, negative edges allowed, detects negative cycles
//! - [`dijkstra`] - Single source, non-negative edges only, with predecessors
//! - [`johnson`] - All pairs, via reweighting and one Dijkstra run per vertex
//!
//! ## Usage
//!
//! ```
//! use pathgrid_core::algorithms::{Algorithm, AlgorithmOutput};
//! use pathgrid_core::Graph;
//!
//! let mut graph = Graph::new(2);
//! graph.set(0, 1, Some(3.0));
//!
//! let algorithm: Algorithm = "dijkstra".parse().unwrap();
//! let output = algorithm.run(&graph, Some(0)).unwrap();
//! assert_eq!(output, AlgorithmOutput::Distances(vec![Some(0.0), Some(3.0)]));
//! ```

mod bellman_ford;
mod dijkstra;
mod johnson;
mod selector;
mod traits;

pub use bellman_ford::{BellmanFordAlgorithm, bellman_ford};
pub use dijkstra::{DijkstraAlgorithm, DijkstraResult, dijkstra};
pub use johnson::{JohnsonAlgorithm, johnson, johnson_with_config};
pub(crate) use johnson::potentials;
pub use selector::Algorithm;
pub use traits::{AlgorithmOutput, ShortestPathAlgorithm};

use pathgrid_common::types::{AdjacencyMatrix, DistanceVector, VertexId, Weight};

/// Iterates over the present cells of `matrix` as `(from, to, weight)`, row-major.
pub(crate) fn present_edges(
    matrix: &AdjacencyMatrix,
) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
    matrix
        .iter()
        .filter_map(|(u, v, weight)| weight.map(|w| (u, v, w)))
}

/// Turns raw distances into the public form.
///
/// Infinite entries become `None`, and the source entry is replaced by the
/// source's self-loop weight.
fn finish_distances(
    dist: Vec<Weight>,
    matrix: &AdjacencyMatrix,
    source: VertexId,
) -> DistanceVector {
    let mut out: DistanceVector = dist
        .into_iter()
        .map(|d| if d == Weight::INFINITY { None } else { Some(d) })
        .collect();
    out[source] = matrix[(source, source)];
    out
}
