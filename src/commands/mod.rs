//! Command dispatch for keygraph
//!
//! Each command builds a sample graph, runs one algorithm and produces a
//! [`Report`], which is then rendered as human text or JSON.

mod report;

use std::time::Instant;

use keygraph_core::error::Result;
use keygraph_core::{algos, Graph, GraphConfig, ShortestPaths};
use tracing::debug;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::samples;
pub use report::{DistanceRow, Report, SampleInfo, TreeEdgeRow};

pub fn run(cli: &Cli, config: &GraphConfig, start: Instant) -> Result<()> {
    let report = execute(&cli.command, config)?;
    debug!(elapsed = ?start.elapsed(), "execute");

    match cli.format {
        OutputFormat::Human => print!("{}", report.to_human()),
        OutputFormat::Json => println!("{}", report.to_json()),
    }
    Ok(())
}

pub fn execute(command: &Commands, config: &GraphConfig) -> Result<Report> {
    let report = match command {
        Commands::Samples => Report::Samples {
            samples: samples::SAMPLES
                .iter()
                .map(|s| SampleInfo {
                    name: s.name.to_string(),
                    description: s.description.to_string(),
                })
                .collect(),
        },
        Commands::Bfs(args) => {
            let graph = samples::build(&args.sample, config)?;
            Report::Traversal {
                algorithm: "bfs",
                start: args.start.clone(),
                order: algos::bfs(&graph, &args.start)?,
            }
        }
        Commands::Dfs(args) => {
            let graph = samples::build(&args.sample, config)?;
            Report::Traversal {
                algorithm: "dfs",
                start: args.start.clone(),
                order: algos::dfs(&graph, &args.start)?,
            }
        }
        Commands::Cycle(args) => {
            let graph = samples::build(&args.sample, config)?;
            Report::Cycle {
                has_cycle: algos::has_cycle(&graph),
                has_directed_cycle: algos::has_directed_cycle(&graph),
                closing_edge: algos::first_cycle_edge(&graph),
            }
        }
        Commands::Dijkstra(args) => {
            let graph = samples::build(&args.sample, config)?;
            let paths = algos::dijkstra(&graph, &args.start)?;
            distances_report("dijkstra", &graph, &paths)
        }
        Commands::BellmanFord(args) => {
            let graph = samples::build(&args.sample, config)?;
            let paths = algos::bellman_ford(&graph, &args.start)?;
            distances_report("bellman-ford", &graph, &paths)
        }
        Commands::Kruskal(args) => {
            let graph = samples::build(&args.sample, config)?;
            tree_report("kruskal", &algos::kruskal_mst(&graph))
        }
        Commands::Prim(args) => {
            let graph = samples::build(&args.sample, config)?;
            tree_report("prim", &algos::prim_mst(&graph, &args.start)?)
        }
        Commands::Articulation(args) => {
            let graph = samples::build(&args.sample, config)?;
            Report::Articulation {
                start: args.start.clone(),
                points: algos::articulation_points(&graph, &args.start)?,
            }
        }
    };
    Ok(report)
}

fn distances_report(algorithm: &'static str, graph: &Graph, paths: &ShortestPaths) -> Report {
    let rows = graph
        .vertices()
        .map(|v| {
            let distance = paths.distance(v.key()).filter(|d| d.is_finite());
            DistanceRow {
                vertex: v.key().to_string(),
                distance,
                path: paths.path_to(v.key()),
            }
        })
        .collect();

    Report::Distances {
        algorithm,
        source: paths.source().to_string(),
        rows,
    }
}

fn tree_report(algorithm: &'static str, tree: &Graph) -> Report {
    Report::SpanningTree {
        algorithm,
        edges: tree
            .edges()
            .map(|e| TreeEdgeRow {
                from: e.from().to_string(),
                to: e.to().to_string(),
                weight: tree.effective_weight(e),
            })
            .collect(),
        total_weight: tree.total_weight(),
    }
}
