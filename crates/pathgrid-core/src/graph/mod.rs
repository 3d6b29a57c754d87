//! Graph model.
//!
//! The graph is a dense adjacency matrix of optional weights. There is no
//! separate vertex or edge store: vertex `v` is row and column `v`, and the
//! cell `[u][v]` is the edge `u -> v` when present.

mod store;

pub use store::Graph;
