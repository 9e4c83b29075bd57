//! `pathtrace path` command - one shortest path and its weight

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::format_path;
use pathtrace_core::error::Result;
use pathtrace_core::format::records_header;
use pathtrace_core::graph::{path_weight, shortest_path, Graph};

/// Execute the path command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    source: &str,
    target: &str,
    precision: usize,
) -> Result<()> {
    let path = shortest_path(graph, source, target)?;
    let weight = if path.is_empty() {
        None
    } else {
        Some(path_weight(graph, &path)?)
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": source,
                "target": target,
                "found": weight.is_some(),
                "path": path,
                "weight": weight,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match weight {
            Some(weight) => {
                println!("{}", format_path(&path));
                if !cli.quiet {
                    println!("Total weight: {}", weight.format(precision));
                }
            }
            None => println!("No path from {} to {}", source, target),
        },
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "path",
                    &[
                        ("source", source.to_string()),
                        ("target", target.to_string()),
                        ("found", weight.is_some().to_string()),
                    ]
                )
            );
            if let Some(weight) = weight {
                println!("P {} weight={}", path.join(" "), weight.format_ascii(precision));
            }
        }
    }

    Ok(())
}
