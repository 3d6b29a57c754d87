//! Pathgrid CLI - run shortest-path algorithms over adjacency-matrix files.
//!
//! The engine lives in `pathgrid-core`; this binary only reads a matrix,
//! hands it to the selected algorithm and prints the distances.

mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use pathgrid_core::Algorithm;
use std::path::PathBuf;

/// Largest matrix accepted unless overridden.
const DEFAULT_MAX_VERTICES: usize = 50;

/// Shortest paths over dense adjacency matrices.
///
/// Matrix files are JSON (`[[null, -2], [3, null]]`) or comma-separated rows
/// where an empty cell means "no edge".
#[derive(Parser)]
#[command(name = "pathgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run a shortest-path algorithm and print the distances
    Run {
        /// Path to the matrix file, `-` for stdin
        path: PathBuf,

        /// Algorithm: bellman-ford, dijkstra or johnson
        #[arg(long, short, default_value = "bellman-ford")]
        algorithm: Algorithm,

        /// Source vertex for single-source algorithms
        #[arg(long, short, default_value_t = 0)]
        source: usize,

        /// Run Johnson's per-source passes in parallel
        #[arg(long)]
        parallel: bool,

        /// Smallest vertex count at which `--parallel` takes effect
        #[arg(long, default_value_t = 0)]
        parallel_threshold: usize,

        /// Reject matrices with more vertices than this
        #[arg(long, default_value_t = DEFAULT_MAX_VERTICES)]
        max_vertices: usize,
    },

    /// Describe a matrix (vertices, edges, negative weights)
    Info {
        /// Path to the matrix file, `-` for stdin
        path: PathBuf,

        /// Reject matrices with more vertices than this
        #[arg(long, default_value_t = DEFAULT_MAX_VERTICES)]
        max_vertices: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity; stdout is reserved for results
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Run {
            path,
            algorithm,
            source,
            parallel,
            parallel_threshold,
            max_vertices,
        } => commands::run::run(
            &commands::run::RunArgs {
                path,
                algorithm,
                source,
                parallel,
                parallel_threshold,
                max_vertices,
            },
            cli.format,
            cli.quiet,
        ),
        Commands::Info { path, max_vertices } => {
            commands::info::run(&path, max_vertices, cli.format, cli.quiet)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
