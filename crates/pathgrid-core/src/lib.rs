//! # pathgrid-core
//!
//! Core layer for Pathgrid: the adjacency-matrix graph and the shortest-path engine.
//!
//! This crate depends only on `pathgrid-common`. Every algorithm is a pure
//! function over a matrix snapshot and returns freshly allocated results.
//!
//! ## Modules
//!
//! - [`graph`] - The [`Graph`] container with its diagonal invariant
//! - [`algorithms`] - Bellman-Ford, Dijkstra, Johnson, and the algorithm selector
//! - [`config`] - Execution options
//!
//! ## Usage
//!
//! ```
//! use pathgrid_core::Graph;
//!
//! let mut graph = Graph::new(3);
//! graph.set(0, 1, Some(4.0));
//! graph.set(1, 2, Some(-1.0));
//!
//! let dist = graph.bellman_ford(0).unwrap();
//! assert_eq!(dist, vec![Some(0.0), Some(4.0), Some(3.0)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod config;
pub mod graph;

// Re-export commonly used types
pub use algorithms::{
    Algorithm, AlgorithmOutput, DijkstraResult, bellman_ford, dijkstra, johnson,
    johnson_with_config,
};
pub use config::Config;
pub use graph::Graph;
