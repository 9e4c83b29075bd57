//! Graph description reader
//!
//! Reads a DOT-like edge list, one statement per edge:
//!
//! ```text
//! graph G {
//!   A -- B [weight=3];
//!   B -- D [weight=3.5];
//! }
//! ```
//!
//! `--` declares an undirected edge and `->` a directed one. Anything that
//! does not match the statement pattern is skipped without error.

use crate::graph::model::Graph;
use crate::graph::types::{EdgeSpec, Variant};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Demo graph shipped with the tool
pub const SAMPLE_GRAPH: &str = r#"graph G {
  A -- B [weight=3];
  B -- D [weight=3.5];
  B -- E [weight=2.8];
  C -- A [weight=3];
  C -- E [weight=2.8];
  C -- F [weight=3.5];
  D -- C [weight=9];
  D -- G [weight=10];
  E -- G [weight=7];
  F -- G [weight=2.5];
}
"#;

static EDGE_RE: OnceLock<Option<Regex>> = OnceLock::new();
static HEADER_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, pattern, "Failed to compile graph description regex");
            None
        }
    }
}

fn edge_regex() -> Option<&'static Regex> {
    EDGE_RE
        .get_or_init(|| {
            compile(r"(\w+)\s*(--|->)\s*(\w+)\s*\[\s*weight\s*=\s*(\d+(?:\.\d+)?)\s*\]\s*;?")
        })
        .as_ref()
}

fn header_regex() -> Option<&'static Regex> {
    HEADER_RE
        .get_or_init(|| compile(r"(?m)^\s*(?:strict\s+)?(digraph|graph)\b"))
        .as_ref()
}

/// Extract the edge statements written with `variant`'s operator, in order.
///
/// Statements using the other operator are ignored.
pub fn parse_edges(text: &str, variant: Variant) -> Vec<EdgeSpec> {
    let Some(re) = edge_regex() else {
        return Vec::new();
    };

    let mut edges = Vec::new();
    let mut skipped = 0usize;
    for cap in re.captures_iter(text) {
        if &cap[2] != variant.operator() {
            skipped += 1;
            continue;
        }
        match cap[4].parse::<f64>() {
            // Digit runs too long for f64 parse as infinity
            Ok(weight) if weight.is_finite() => {
                edges.push(EdgeSpec::new(&cap[1], &cap[3], weight))
            }
            _ => skipped += 1,
        }
    }

    debug!(edges = edges.len(), skipped, variant = %variant, "parse_edges");
    edges
}

/// Guess the variant from a `graph`/`digraph` header, falling back to the
/// first edge operator in the text.
pub fn detect_variant(text: &str) -> Option<Variant> {
    if let Some(cap) = header_regex().and_then(|re| re.captures(text)) {
        return cap[1].parse().ok();
    }
    edge_regex()
        .and_then(|re| re.captures(text))
        .map(|cap| match &cap[2] {
            "->" => Variant::Directed,
            _ => Variant::Undirected,
        })
}

/// Nodes in order of first appearance in `edges`
pub fn node_order(edges: &[EdgeSpec]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for edge in edges {
        for node in [&edge.from, &edge.to] {
            if seen.insert(node.as_str()) {
                order.push(node.clone());
            }
        }
    }
    order
}

impl Graph {
    /// Build a graph from a description using `variant`'s edge operator
    pub fn from_description(text: &str, variant: Variant) -> Self {
        Graph::from_edges(variant, parse_edges(text, variant))
    }
}
