//! `pathtrace run` command - final distances and predecessors

use std::io::{self, Write};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{write_distance_records, write_distance_table};
use pathtrace_core::error::Result;
use pathtrace_core::format::records_header;
use pathtrace_core::graph::{self, Graph};

/// Execute the run command
pub fn execute(cli: &Cli, graph: &Graph, source: &str, precision: usize) -> Result<()> {
    let result = graph::run(graph, source)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": result.source,
                "variant": graph.variant(),
                "distances": result.distances,
                "predecessors": result.predecessors,
                "reachable": result.reachable(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Human => {
            if !cli.quiet {
                writeln!(
                    out,
                    "Shortest paths from {} ({}, {} nodes, {} reachable)",
                    result.source,
                    graph.variant(),
                    graph.node_count(),
                    result.reachable().len()
                )?;
                writeln!(out)?;
            }
            write_distance_table(
                &mut out,
                &result.distances,
                Some(&result.predecessors),
                precision,
            )?;
        }
        OutputFormat::Records => {
            writeln!(
                out,
                "{}",
                records_header(
                    "run",
                    &[
                        ("source", result.source.clone()),
                        ("variant", graph.variant().to_string()),
                        ("nodes", graph.node_count().to_string()),
                    ]
                )
            )?;
            write_distance_records(
                &mut out,
                &result.distances,
                Some(&result.predecessors),
                precision,
            )?;
        }
    }

    Ok(())
}
