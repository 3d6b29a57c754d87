//! Matrix info command.

use std::path::Path;

use anyhow::Result;
use pathgrid_core::{Algorithm, Graph};
use serde::Serialize;

use crate::OutputFormat;
use crate::input;
use crate::output::{self, Format};

/// Summary of a matrix.
#[derive(Serialize)]
struct MatrixInfoOutput {
    vertex_count: usize,
    edge_count: usize,
    negative_edge_count: usize,
    self_loop_count: usize,
    has_negative_cycle: bool,
    bellman_ford_sources: Vec<usize>,
    usable_algorithms: Vec<&'static str>,
}

impl MatrixInfoOutput {
    fn from_graph(graph: &Graph) -> Self {
        let negative_edge_count = graph.edges().filter(|&(_, _, w)| w < 0.0).count();
        let has_negative_cycle = graph.has_negative_cycle();
        // a source that cannot reach any negative cycle still succeeds
        let bellman_ford_sources: Vec<usize> = if has_negative_cycle {
            (0..graph.vertex_count())
                .filter(|&source| graph.bellman_ford(source).is_ok())
                .collect()
        } else {
            (0..graph.vertex_count()).collect()
        };
        let usable_algorithms = Algorithm::ALL
            .into_iter()
            .filter(|algorithm| match algorithm {
                Algorithm::BellmanFord => !bellman_ford_sources.is_empty(),
                Algorithm::Dijkstra => negative_edge_count == 0,
                Algorithm::Johnson => !has_negative_cycle,
            })
            .map(Algorithm::name)
            .collect();

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            negative_edge_count,
            self_loop_count: graph.edges().filter(|&(u, v, w)| u == v && w != 0.0).count(),
            has_negative_cycle,
            bellman_ford_sources,
            usable_algorithms,
        }
    }
}

/// Run the info command.
pub fn run(path: &Path, max_vertices: usize, format: OutputFormat, quiet: bool) -> Result<()> {
    let matrix = input::load_matrix(path, max_vertices)?;
    let info = MatrixInfoOutput::from_graph(&Graph::from_matrix(&matrix));

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&info)?);
            }
        }
        Format::Table => {
            let bf_sources = if info.bellman_ford_sources.len() == info.vertex_count {
                "all".to_string()
            } else if info.bellman_ford_sources.is_empty() {
                "none".to_string()
            } else {
                info.bellman_ford_sources
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let items = vec![
                ("Vertices", info.vertex_count.to_string()),
                ("Edges", info.edge_count.to_string()),
                ("Negative edges", info.negative_edge_count.to_string()),
                ("Self-loops", info.self_loop_count.to_string()),
                ("Negative cycle", info.has_negative_cycle.to_string()),
                ("Bellman-Ford sources", bf_sources),
                ("Usable algorithms", info.usable_algorithms.join(", ")),
            ];
            output::print_key_value_table(&items, quiet);
        }
    }

    Ok(())
}
