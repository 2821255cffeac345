//! Keygraph - classical graph algorithms over keyed graphs
//!
//! The binary runs the library's algorithms against a handful of built-in
//! sample graphs and prints the results as text or JSON.

mod cli;
mod commands;
mod samples;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use keygraph_core::error::{ExitCode as GraphExitCode, GraphError};
use keygraph_core::{logging, GraphConfig};

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `Cli.format` exists; honour a JSON request anyway
            if argv_format_json {
                match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => {
                        let graph_error = GraphError::UsageError(err.to_string());
                        eprintln!("{}", graph_error.to_json());
                        return ExitCode::from(graph_error.exit_code() as u8);
                    }
                }
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = load_config(&cli).and_then(|config| commands::run(&cli, &config, start));

    match result {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn load_config(cli: &Cli) -> keygraph_core::Result<GraphConfig> {
    match &cli.config {
        Some(path) => GraphConfig::load(path),
        None => Ok(GraphConfig::default()),
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
