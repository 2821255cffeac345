//! CLI argument parsing for keygraph
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Keygraph - run classical graph algorithms over built-in sample graphs
#[derive(Parser, Debug)]
#[command(name = "keygraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph configuration file (TOML)
    #[arg(long, global = true, env = "KEYGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress error messages on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "keygraph_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Sample graph plus start vertex
#[derive(Args, Debug, Clone)]
pub struct StartArgs {
    /// Built-in sample graph (see `keygraph samples`)
    #[arg(long, short)]
    pub sample: String,

    /// Key of the start vertex
    #[arg(long)]
    pub start: String,
}

/// Sample graph only
#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    /// Built-in sample graph (see `keygraph samples`)
    #[arg(long, short)]
    pub sample: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in sample graphs
    Samples,

    /// Breadth-first traversal order from a start vertex
    Bfs(StartArgs),

    /// Depth-first (stack-based) traversal order from a start vertex
    Dfs(StartArgs),

    /// Report whether the graph contains a cycle
    Cycle(SampleArgs),

    /// Shortest distances with Dijkstra's algorithm
    Dijkstra(StartArgs),

    /// Shortest distances with Bellman-Ford (allows negative weights)
    BellmanFord(StartArgs),

    /// Minimum spanning forest with Kruskal's algorithm
    Kruskal(SampleArgs),

    /// Minimum spanning forest with Prim's algorithm
    Prim(StartArgs),

    /// Articulation points (cut vertices)
    Articulation(StartArgs),
}
