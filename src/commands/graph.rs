//! `pathtrace graph` command - describe the parsed graph

use crate::cli::{Cli, OutputFormat};
use pathtrace_core::error::Result;
use pathtrace_core::format::records_header;
use pathtrace_core::graph::{Distance, EdgeSpec, Graph};

/// Execute the graph command
pub fn execute(cli: &Cli, graph: &Graph, precision: usize) -> Result<()> {
    // Self-loops never shorten a path; they are not drawn either.
    let edges: Vec<EdgeSpec> = graph
        .edges()
        .into_iter()
        .filter(|edge| !edge.is_self_loop())
        .collect();
    let nodes: Vec<&str> = graph.nodes().collect();
    let operator = graph.variant().operator();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "variant": graph.variant(),
                "nodes": nodes,
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Graph ({}, {} nodes, {} edges)",
                    graph.variant(),
                    nodes.len(),
                    edges.len()
                );
                println!();
            }
            println!("Nodes: {}", nodes.join(" "));
            println!("Edges:");
            for edge in &edges {
                println!(
                    "  {} {} {}  {}",
                    edge.from,
                    operator,
                    edge.to,
                    Distance::new(edge.weight).format(precision)
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "graph",
                    &[
                        ("variant", graph.variant().to_string()),
                        ("nodes", nodes.len().to_string()),
                        ("edges", edges.len().to_string()),
                    ]
                )
            );
            for node in &nodes {
                println!("N {}", node);
            }
            for edge in &edges {
                println!(
                    "E {} {} {} {}",
                    edge.from,
                    operator,
                    edge.to,
                    Distance::new(edge.weight).format_ascii(precision)
                );
            }
        }
    }

    Ok(())
}
