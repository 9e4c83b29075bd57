//! Path reconstruction from a predecessor map

use crate::error::{PathtraceError, Result};
use crate::graph::algos::dijkstra;
use crate::graph::model::Graph;
use crate::graph::types::{Distance, DistanceMap, PredecessorMap};

/// Shortest path from `source` to `target` as an ordered node list.
///
/// Returns an empty list when `target` is unreachable and `[source]` when
/// both ends coincide.
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Result<Vec<String>> {
    if !graph.contains(target) {
        return Err(PathtraceError::node_not_found(target));
    }
    let result = dijkstra::run(graph, source)?;
    result.path_to(target)
}

/// Walk the predecessor chain from `target` back to `source`.
///
/// A chain that ends before reaching `source`, or loops for longer than
/// there are nodes, is reported as `BrokenPathReconstruction`.
pub fn reconstruct_path(
    source: &str,
    target: &str,
    distances: &DistanceMap,
    predecessors: &PredecessorMap,
) -> Result<Vec<String>> {
    let reached = distances.get(target).copied().unwrap_or_default();
    if !reached.is_finite() {
        return Ok(Vec::new());
    }

    let mut path = vec![target.to_string()];
    let mut current = target;

    while current != source {
        if path.len() > predecessors.len() {
            return Err(broken(source, target, current));
        }
        match predecessors.get(current).and_then(|pred| pred.as_deref()) {
            Some(pred) => {
                path.push(pred.to_string());
                current = pred;
            }
            None => return Err(broken(source, target, current)),
        }
    }

    path.reverse();
    Ok(path)
}

fn broken(source: &str, target: &str, reached: &str) -> PathtraceError {
    tracing::warn!(source, target, reached, "broken predecessor chain");
    PathtraceError::BrokenPathReconstruction {
        origin: source.to_string(),
        target: target.to_string(),
        reached: reached.to_string(),
    }
}

/// Sum of the edge weights along `path`
pub fn path_weight(graph: &Graph, path: &[String]) -> Result<Distance> {
    let mut total = Distance::ZERO;
    for pair in path.windows(2) {
        let weight = graph.weight(&pair[0], &pair[1]).ok_or_else(|| {
            PathtraceError::invalid_value(
                "path edge",
                format!("{} {} {}", pair[0], graph.variant().operator(), pair[1]),
            )
        })?;
        total = total + weight;
    }
    Ok(total)
}
