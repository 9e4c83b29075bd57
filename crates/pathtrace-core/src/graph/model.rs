//! Adjacency-map graph model

use crate::error::{PathtraceError, Result};
use crate::graph::types::{EdgeSpec, Variant};
use std::collections::BTreeMap;

/// Neighbor → edge weight
pub type Neighbors = BTreeMap<String, f64>;

/// Weighted graph stored as node → (neighbor → weight).
///
/// Every endpoint of an inserted edge is a key, possibly with an empty
/// neighbor map. Inserting the same ordered pair twice keeps the last weight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    variant: Variant,
    adjacency: BTreeMap<String, Neighbors>,
}

impl Graph {
    pub fn new(variant: Variant) -> Self {
        Graph {
            variant,
            adjacency: BTreeMap::new(),
        }
    }

    pub fn undirected() -> Self {
        Self::new(Variant::Undirected)
    }

    pub fn directed() -> Self {
        Self::new(Variant::Directed)
    }

    /// Build a graph by inserting `edges` in order
    pub fn from_edges<I>(variant: Variant, edges: I) -> Self
    where
        I: IntoIterator<Item = EdgeSpec>,
    {
        let mut graph = Self::new(variant);
        for edge in edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight);
        }
        graph
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Insert an edge. Undirected graphs also insert the reverse direction.
    ///
    /// `weight` must be finite and non-negative; the description reader
    /// only produces such weights.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) {
        debug_assert!(
            weight.is_finite() && weight >= 0.0,
            "edge weight must be finite and non-negative, got {}",
            weight
        );

        self.add_node(from);
        self.add_node(to);

        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.insert(to.to_string(), weight);
        }
        if self.variant == Variant::Undirected {
            if let Some(neighbors) = self.adjacency.get_mut(to) {
                neighbors.insert(from.to_string(), weight);
            }
        }
    }

    /// Register a node without edges (no-op if present)
    pub fn add_node(&mut self, node: &str) {
        if !self.adjacency.contains_key(node) {
            self.adjacency.insert(node.to_string(), Neighbors::new());
        }
    }

    /// Neighbors of `node` with their edge weights
    pub fn neighbors(&self, node: &str) -> Result<&Neighbors> {
        self.adjacency
            .get(node)
            .ok_or_else(|| PathtraceError::node_not_found(node))
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Weight of the stored edge `from → to`, if any
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency
            .get(from)
            .and_then(|neighbors| neighbors.get(to))
            .copied()
    }

    /// Node identifiers in sorted order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Stored edges, once each.
    ///
    /// Undirected graphs yield one triple per unordered pair with
    /// `from <= to`; directed graphs yield every arc.
    pub fn edges(&self) -> Vec<EdgeSpec> {
        let mut edges = Vec::new();
        for (from, neighbors) in &self.adjacency {
            for (to, &weight) in neighbors {
                if self.variant == Variant::Undirected && from > to {
                    continue;
                }
                edges.push(EdgeSpec::new(from.as_str(), to.as_str(), weight));
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
