//! # pathgrid-common
//!
//! Foundation layer for Pathgrid: types, the dense matrix container, and errors.
//!
//! This crate provides the building blocks used by the other Pathgrid crates.
//! It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (Weight, VertexId, SquareMatrix)
//! - [`utils`] - Utility functions and helpers (errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{AdjacencyMatrix, DistanceMatrix, DistanceVector, SquareMatrix, VertexId, Weight};
pub use utils::error::{Error, GraphError, Result};
