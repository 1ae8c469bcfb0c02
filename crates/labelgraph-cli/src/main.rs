//! CLI entry point for the `is-connected` command-line tool.
//!
//! Loads a map description and answers "is there a path from A to B?"
//! questions about it, interactively or one at a time.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use labelgraph::export::{self, DotOptions};
use labelgraph::{query, Backend, CapacityPolicy, GraphError, LoaderConfig, MapLoader};

#[derive(Parser)]
#[command(
    name = "is-connected",
    about = "Answer reachability queries over a directed map"
)]
struct Cli {
    /// Map file: a capacity line followed by one "FROM TO" edge per line
    map: PathBuf,

    /// Graph storage backend: "matrix" or "list"
    #[arg(long, default_value = "list")]
    backend: Backend,

    /// Meaning of the capacity line: "nodes" or "edges"
    #[arg(long, default_value = "nodes")]
    capacity_policy: CapacityPolicy,

    /// Answer a single query and exit (status 2 when there is no path)
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"], conflicts_with = "export")]
    check: Option<Vec<String>>,

    /// Print the loaded graph instead of querying it
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Graphviz DOT
    Dot,
    /// D3.js-compatible JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(err @ GraphError::CapacityExceeded { .. }) => {
            // The declared capacity is a contract of the map file
            error!("More nodes than declared in {}: {err}", cli.map.display());
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> labelgraph::Result<ExitCode> {
    let config = LoaderConfig::default()
        .with_backend(cli.backend)
        .with_capacity_policy(cli.capacity_policy);
    let mut graph = MapLoader::new(config).load_file(&cli.map)?;
    info!(
        "Loaded {} nodes and {} edges ({} backend)",
        graph.node_count(),
        graph.edge_count(),
        cli.backend
    );

    if let Some(format) = cli.export {
        let text = match format {
            ExportFormat::Dot => export::export_dot(graph.as_ref(), &DotOptions::default()),
            ExportFormat::Json => export::export_json(graph.as_ref())?,
        };
        print!("{text}");
        return Ok(ExitCode::SUCCESS);
    }

    if let Some([from, to]) = cli.check.as_deref() {
        let outcome = query::check(graph.as_mut(), from, to)?;
        println!("{outcome}");
        return Ok(if outcome.is_connected() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(2)
        });
    }

    let answered = query::run_session(graph.as_mut(), io::stdin().lock(), io::stdout().lock())?;
    info!("Answered {answered} queries");
    Ok(ExitCode::SUCCESS)
}
