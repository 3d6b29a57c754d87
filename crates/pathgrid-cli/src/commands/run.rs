//! Run command: one algorithm over one matrix.

use std::path::PathBuf;

use anyhow::Result;
use pathgrid_core::{Algorithm, AlgorithmOutput, Config, Graph};
use serde::Serialize;

use crate::OutputFormat;
use crate::input;
use crate::output::{self, Format};

/// Arguments of the run command.
pub struct RunArgs {
    pub path: PathBuf,
    pub algorithm: Algorithm,
    pub source: usize,
    pub parallel: bool,
    pub parallel_threshold: usize,
    pub max_vertices: usize,
}

/// JSON shape of a run.
#[derive(Serialize)]
struct RunOutput<'a> {
    algorithm: &'static str,
    source: Option<usize>,
    vertex_count: usize,
    parallel: bool,
    distances: &'a AlgorithmOutput,
}

/// Only Johnson's per-source passes are parallelised.
fn runs_parallel(algorithm: Algorithm, config: &Config, vertex_count: usize) -> bool {
    algorithm == Algorithm::Johnson && config.use_parallel(vertex_count)
}

/// Run the run command.
pub fn run(args: &RunArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let matrix = input::load_matrix(&args.path, args.max_vertices)?;
    let graph = Graph::from_matrix(&matrix);
    let config = Config::default()
        .with_parallel(args.parallel)
        .with_parallel_threshold(args.parallel_threshold);

    let source = args.algorithm.requires_source().then_some(args.source);
    let result = args.algorithm.run_with_config(&graph, source, &config)?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            if !quiet {
                let out = RunOutput {
                    algorithm: args.algorithm.name(),
                    source,
                    vertex_count: graph.vertex_count(),
                    parallel: runs_parallel(args.algorithm, &config, graph.vertex_count()),
                    distances: &result,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
        }
        Format::Table => {
            let heading = match source {
                Some(s) => format!("{} from vertex {s}", args.algorithm),
                None => format!("{} (all pairs)", args.algorithm),
            };
            output::status(&heading, quiet);
            if !quiet {
                let table = match &result {
                    AlgorithmOutput::Distances(dist) => output::distance_table(dist),
                    AlgorithmOutput::AllPairs(matrix) => output::matrix_table(matrix),
                };
                println!("{table}");
            }
        }
    }

    Ok(())
}
