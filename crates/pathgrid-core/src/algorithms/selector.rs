//! Runtime selection of a shortest-path algorithm by name.

use std::fmt;
use std::str::FromStr;

use pathgrid_common::types::VertexId;
use pathgrid_common::utils::error::{Error, Result};

use super::traits::{AlgorithmOutput, ShortestPathAlgorithm};
use super::{BellmanFordAlgorithm, DijkstraAlgorithm, JohnsonAlgorithm};
use crate::config::Config;
use crate::graph::Graph;

/// The available algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Single source, negative edges allowed.
    BellmanFord,
    /// Single source, non-negative edges only.
    Dijkstra,
    /// All pairs.
    Johnson,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BellmanFord,
        Algorithm::Dijkstra,
        Algorithm::Johnson,
    ];

    /// The implementation behind this variant.
    pub fn implementation(self) -> &'static dyn ShortestPathAlgorithm {
        match self {
            Algorithm::BellmanFord => &BellmanFordAlgorithm,
            Algorithm::Dijkstra => &DijkstraAlgorithm,
            Algorithm::Johnson => &JohnsonAlgorithm,
        }
    }

    /// Stable, kebab-case name.
    pub fn name(self) -> &'static str {
        self.implementation().name()
    }

    /// Whether a source vertex must be given.
    pub fn requires_source(self) -> bool {
        self.implementation().requires_source()
    }

    /// Runs the algorithm with the default [`Config`].
    pub fn run(self, graph: &Graph, source: Option<VertexId>) -> Result<AlgorithmOutput> {
        self.run_with_config(graph, source, &Config::default())
    }

    /// Runs the algorithm with explicit options.
    pub fn run_with_config(
        self,
        graph: &Graph,
        source: Option<VertexId>,
        config: &Config,
    ) -> Result<AlgorithmOutput> {
        tracing::debug!(
            algorithm = self.name(),
            vertices = graph.vertex_count(),
            ?source,
            "run"
        );
        self.implementation().execute(graph, source, config)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts the kebab-case name, ignoring case, spaces, underscores,
    /// apostrophes and a trailing possessive `s`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        let key = normalized.strip_suffix('s').unwrap_or(&normalized);

        match key {
            "bellmanford" | "bf" => Ok(Algorithm::BellmanFord),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "johnson" => Ok(Algorithm::Johnson),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
