//! Error types for Pathgrid.
//!
//! [`Error`] is the single error type returned across the workspace. The two
//! conditions that make a graph unusable for an algorithm share one variant,
//! [`Error::InvalidGraph`], and are told apart by [`GraphError`].

use thiserror::Error;

use crate::types::{VertexId, Weight};

/// Result type alias using the Pathgrid error.
pub type Result<T> = std::result::Result<T, Error>;

/// Reason a graph cannot be processed by the requested algorithm.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge still relaxed after `V - 1` full Bellman-Ford passes.
    #[error("graph contains negative weight cycle")]
    NegativeCycle,
    /// Dijkstra scanned an edge with a negative weight.
    #[error("graph contains negative edge {from} -> {to} ({weight})")]
    NegativeEdge {
        /// Tail of the edge.
        from: VertexId,
        /// Head of the edge.
        to: VertexId,
        /// The offending weight.
        weight: Weight,
    },
}

/// Errors produced by Pathgrid.
#[derive(Error, Debug)]
pub enum Error {
    /// The graph violates a precondition of the algorithm.
    #[error("invalid graph for requested algorithm: {0}")]
    InvalidGraph(#[from] GraphError),

    /// Rows of a matrix do not all have as many cells as there are rows.
    #[error("matrix is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Index of the first offending row.
        row: usize,
        /// Number of cells in that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// A vertex index is outside `0..vertex_count`.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The requested vertex.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// A single-source algorithm was requested without a source vertex.
    #[error("algorithm {0} requires a source vertex")]
    MissingSource(&'static str),

    /// Algorithm name not recognised.
    #[error("unsupported algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A matrix cell could not be read as a finite number.
    #[error("invalid weight `{text}` at row {row}, column {col}")]
    InvalidWeight {
        /// Cell text as found in the input.
        text: String,
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
    },

    /// The matrix has more vertices than allowed.
    #[error("matrix has {vertex_count} vertices, limit is {limit}")]
    TooManyVertices {
        /// Number of vertices in the input.
        vertex_count: usize,
        /// Configured limit.
        limit: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// Returns the graph error if this is an [`Error::InvalidGraph`].
    pub fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Error::InvalidGraph(reason) => Some(reason),
            _ => None,
        }
    }
}
