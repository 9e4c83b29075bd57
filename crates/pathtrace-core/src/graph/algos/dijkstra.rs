use crate::error::{PathtraceError, Result};
use crate::graph::algos::path::reconstruct_path;
use crate::graph::model::Graph;
use crate::graph::snapshot::{Snapshot, Snapshots};
use crate::graph::types::{Distance, DistanceMap, PredecessorMap};
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use tracing::{debug, trace};

/// Frontier entry. Wrapped in `Reverse` so the heap pops the smallest
/// distance first, and the node identifier among equal distances.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub distance: Distance,
    pub node: String,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Everything one engine run produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub source: String,
    pub distances: DistanceMap,
    pub predecessors: PredecessorMap,
    pub snapshots: Snapshots,
}

impl ShortestPaths {
    /// Final distance of `node` (infinite when unknown or unreached)
    pub fn distance(&self, node: &str) -> Distance {
        self.distances.get(node).copied().unwrap_or_default()
    }

    pub fn predecessor(&self, node: &str) -> Option<&str> {
        self.predecessors
            .get(node)
            .and_then(|pred| pred.as_deref())
    }

    /// Nodes with a finite distance, sorted
    pub fn reachable(&self) -> Vec<&str> {
        self.distances
            .iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(node, _)| node.as_str())
            .collect()
    }

    /// Shortest path from the source to `target`, reusing this run.
    /// Empty when `target` is unreachable.
    pub fn path_to(&self, target: &str) -> Result<Vec<String>> {
        if !self.distances.contains_key(target) {
            return Err(PathtraceError::node_not_found(target));
        }
        reconstruct_path(&self.source, target, &self.distances, &self.predecessors)
    }
}

/// State tracked during the run
struct DijkstraState {
    distances: DistanceMap,
    predecessors: PredecessorMap,
    snapshots: Snapshots,
    visited: HashSet<String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    relaxations: usize,
}

impl DijkstraState {
    fn new(graph: &Graph) -> Self {
        let distances: DistanceMap = graph
            .nodes()
            .map(|node| (node.to_string(), Distance::INFINITY))
            .collect();
        let predecessors: PredecessorMap =
            graph.nodes().map(|node| (node.to_string(), None)).collect();

        let mut snapshots = Snapshots::new();
        snapshots.push(distances.clone());

        Self {
            distances,
            predecessors,
            snapshots,
            visited: HashSet::new(),
            heap: BinaryHeap::new(),
            relaxations: 0,
        }
    }

    fn seed(&mut self, source: &str) {
        self.distances.insert(source.to_string(), Distance::ZERO);

        let mut start = Snapshot::new();
        start.insert(source.to_string(), Distance::ZERO);
        self.snapshots.push(start);

        self.heap.push(Reverse(HeapEntry {
            distance: Distance::ZERO,
            node: source.to_string(),
        }));
    }

    /// Relax the edge `current → neighbor`; records a snapshot on improvement
    fn relax(&mut self, current: &str, current_distance: Distance, neighbor: &str, weight: f64) {
        let candidate = current_distance + weight;
        let known = self.distances.get(neighbor).copied().unwrap_or_default();
        if candidate.total_cmp(&known) != Ordering::Less {
            return;
        }

        trace!(from = current, to = neighbor, distance = candidate.value(), "relax");

        self.distances.insert(neighbor.to_string(), candidate);
        self.snapshots.push_change(neighbor, candidate);
        self.heap.push(Reverse(HeapEntry {
            distance: candidate,
            node: neighbor.to_string(),
        }));
        self.predecessors
            .insert(neighbor.to_string(), Some(current.to_string()));
        self.relaxations += 1;
    }
}

/// Run Dijkstra from `source`, recording a snapshot of the distance table
/// for every successful relaxation.
///
/// The graph is only read, so repeated runs over the same graph and source
/// produce identical results.
#[tracing::instrument(skip(graph), fields(variant = %graph.variant(), nodes = graph.node_count()))]
pub fn run(graph: &Graph, source: &str) -> Result<ShortestPaths> {
    if !graph.contains(source) {
        return Err(PathtraceError::UnknownSource {
            node: source.to_string(),
        });
    }

    let mut state = DijkstraState::new(graph);
    state.seed(source);

    // Main loop; stale heap entries are skipped through the visited set
    while let Some(Reverse(HeapEntry {
        distance: current_distance,
        node: current,
    })) = state.heap.pop()
    {
        if !state.visited.insert(current.clone()) {
            continue;
        }

        for (neighbor, &weight) in graph.neighbors(&current)? {
            // Skip self-loops
            if *neighbor == current {
                continue;
            }
            state.relax(&current, current_distance, neighbor, weight);
        }
    }

    debug!(
        relaxations = state.relaxations,
        reached = state.visited.len(),
        snapshots = state.snapshots.len(),
        "dijkstra_complete"
    );

    Ok(ShortestPaths {
        source: source.to_string(),
        distances: state.distances,
        predecessors: state.predecessors,
        snapshots: state.snapshots,
    })
}
