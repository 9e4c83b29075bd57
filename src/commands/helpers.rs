//! Helper functions shared across commands

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use crate::cli::GraphArgs;
use pathtrace_core::config::Config;
use pathtrace_core::error::Result;
use pathtrace_core::graph::{Graph, Variant};
use pathtrace_core::parse::detect_variant;
use pathtrace_core::trace_time;
use tracing::{debug, warn};

/// Read the graph description named by `args` (`-` means stdin)
pub fn read_description(args: &GraphArgs) -> Result<String> {
    if args.reads_stdin() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(&args.file)?)
    }
}

/// Pick the variant: explicit flag, then the description header, then config
pub fn resolve_variant(args: &GraphArgs, text: &str, config: &Config) -> Variant {
    args.variant_flag()
        .or_else(|| detect_variant(text))
        .unwrap_or(config.graph.variant)
}

/// Read, classify and parse a graph description
pub fn load_graph(args: &GraphArgs, config: &Config) -> Result<Graph> {
    let start = Instant::now();
    let text = read_description(args)?;
    trace_time!(start, "read_description", bytes = text.len());

    let variant = resolve_variant(args, &text, config);
    let graph = Graph::from_description(&text, variant);

    if graph.is_empty() {
        warn!(file = %args.file.display(), variant = %variant, "no edges found in graph description");
    }

    debug!(
        elapsed = ?start.elapsed(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        variant = %variant,
        "load_graph"
    );
    Ok(graph)
}

/// Render a node list as `A -> B -> C`
pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}
