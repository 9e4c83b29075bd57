//! `pathtrace sample` command - print the demo graph description

use crate::cli::{Cli, OutputFormat};
use pathtrace_core::error::Result;
use pathtrace_core::graph::Variant;
use pathtrace_core::parse::{node_order, parse_edges, SAMPLE_GRAPH};

/// Execute the sample command
pub fn execute(cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let edges = parse_edges(SAMPLE_GRAPH, Variant::Undirected);
            let output = serde_json::json!({
                "variant": Variant::Undirected,
                "nodes": node_order(&edges),
                "edges": edges,
                "description": SAMPLE_GRAPH,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        // The description is already line oriented; scripts pipe it as is.
        OutputFormat::Human | OutputFormat::Records => print!("{}", SAMPLE_GRAPH),
    }
    Ok(())
}
