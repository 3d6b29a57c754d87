//! Adjacency-matrix graph store.

use std::ops::Index;

use pathgrid_common::types::{AdjacencyMatrix, DistanceMatrix, DistanceVector, VertexId, Weight};
use pathgrid_common::utils::error::Result;

use crate::algorithms::{self, DijkstraResult};

/// A directed, weighted graph backed by a square matrix of optional weights.
///
/// Every diagonal cell holds a weight: writing `None` to `[v][v]` stores `0.0`,
/// so the distance from a vertex to itself is always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    matrix: AdjacencyMatrix,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathgrid_core::Graph;
    ///
    /// let graph = Graph::new(2);
    /// assert_eq!(graph[(0, 0)], Some(0.0));
    /// assert_eq!(graph[(0, 1)], None);
    /// ```
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        let mut graph = Self {
            matrix: AdjacencyMatrix::new(vertex_count),
        };
        for v in 0..vertex_count {
            graph.set(v, v, None);
        }
        graph
    }

    /// Creates a graph of the same size as `matrix`, copying every present cell.
    #[must_use]
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        let mut graph = Self::new(matrix.size());
        for (u, v, weight) in matrix.iter() {
            if weight.is_some() {
                graph.set(u, v, *weight);
            }
        }
        graph
    }

    /// Creates a graph from nested rows of optional weights.
    ///
    /// # Errors
    ///
    /// Returns [`pathgrid_common::Error::NotSquare`] for ragged rows.
    pub fn from_rows(rows: Vec<Vec<Option<Weight>>>) -> Result<Self> {
        Ok(Self::from_matrix(&AdjacencyMatrix::from_rows(rows)?))
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.matrix.size()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Weight of edge `from -> to`, or `None` if there is no edge.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of range.
    pub fn get(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.matrix[(from, to)]
    }

    /// Sets the weight of edge `from -> to`.
    ///
    /// `None` removes the edge, except on the diagonal where it stores `0.0`.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of range.
    pub fn set(&mut self, from: VertexId, to: VertexId, weight: Option<Weight>) {
        let weight = if from == to { weight.or(Some(0.0)) } else { weight };
        self.matrix[(from, to)] = weight;
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Consumes the graph, returning its matrix.
    pub fn into_matrix(self) -> AdjacencyMatrix {
        self.matrix
    }

    /// Iterates over present cells as `(from, to, weight)`, row-major.
    ///
    /// Diagonal cells are included since they are always present.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        algorithms::present_edges(&self.matrix)
    }

    /// Number of present off-diagonal cells.
    pub fn edge_count(&self) -> usize {
        self.edges().filter(|(u, v, _)| u != v).count()
    }

    /// Returns true if any present cell, diagonal included, is negative.
    pub fn has_negative_edge(&self) -> bool {
        self.edges().any(|(_, _, w)| w < 0.0)
    }

    /// Returns true if some cycle, self-loops included, has negative total weight.
    ///
    /// Runs the Bellman-Ford pass of [`algorithms::johnson`], so every cycle
    /// counts, reachable from a given vertex or not.
    pub fn has_negative_cycle(&self) -> bool {
        !self.is_empty() && algorithms::potentials(&self.matrix).is_err()
    }

    /// Single-source distances allowing negative edges.
    ///
    /// See [`algorithms::bellman_ford`].
    pub fn bellman_ford(&self, source: VertexId) -> Result<DistanceVector> {
        algorithms::bellman_ford(&self.matrix, source)
    }

    /// Single-source distances and predecessors over non-negative edges.
    ///
    /// See [`algorithms::dijkstra`].
    pub fn dijkstra(&self, source: VertexId) -> Result<DijkstraResult> {
        algorithms::dijkstra(&self.matrix, source)
    }

    /// All-pairs distances.
    ///
    /// See [`algorithms::johnson`].
    pub fn johnson(&self) -> Result<DistanceMatrix> {
        algorithms::johnson(&self.matrix)
    }
}

impl Index<(VertexId, VertexId)> for Graph {
    type Output = Option<Weight>;

    fn index(&self, index: (VertexId, VertexId)) -> &Option<Weight> {
        &self.matrix[index]
    }
}

impl From<&AdjacencyMatrix> for Graph {
    fn from(matrix: &AdjacencyMatrix) -> Self {
        Self::from_matrix(matrix)
    }
}
