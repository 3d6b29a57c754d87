//! Core type definitions for Pathgrid.
//!
//! This module contains the fundamental types shared by the engine and its callers:
//! - Scalar types ([`Weight`], [`VertexId`])
//! - The dense grid container ([`SquareMatrix`]) and its aliases
//!   ([`AdjacencyMatrix`], [`DistanceMatrix`], [`DistanceVector`])

mod matrix;

pub use matrix::SquareMatrix;

/// Edge weight or path length.
pub type Weight = f64;

/// Index of a vertex in a matrix, in `0..vertex_count`.
pub type VertexId = usize;

/// Adjacency matrix: `[u][v]` holds the weight of edge `u -> v`, `None` if there is no edge.
pub type AdjacencyMatrix = SquareMatrix<Option<Weight>>;

/// All-pairs result: `[v][u]` holds the distance from `v` to `u`, `None` if unreachable.
pub type DistanceMatrix = SquareMatrix<Option<Weight>>;

/// Single-source result: one entry per vertex, `None` if unreachable.
pub type DistanceVector = Vec<Option<Weight>>;
