//! Replay session state
//!
//! Holds one graph, the selected source/target, the engine output and the
//! snapshot cursor. Front ends mutate it through these methods and redraw
//! from it; nothing lives in globals.

use crate::error::{PathtraceError, Result};
use crate::graph::algos::dijkstra::{self, ShortestPaths};
use crate::graph::model::Graph;
use crate::graph::types::{Distance, DistanceMap};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Session {
    graph: Graph,
    source: String,
    target: Option<String>,
    result: ShortestPaths,
    cursor: usize,
}

impl Session {
    /// Run the engine from `source` and start at snapshot 0
    pub fn new(graph: Graph, source: &str) -> Result<Self> {
        let result = dijkstra::run(&graph, source)?;
        Ok(Session {
            graph,
            source: source.to_string(),
            target: None,
            result,
            cursor: 0,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn result(&self) -> &ShortestPaths {
        &self.result
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots
    pub fn len(&self) -> usize {
        self.result.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.snapshots.is_empty()
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.result.snapshots.last_index()
    }

    /// Advance one snapshot; false when already at the last one
    pub fn step_forward(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Go back one snapshot; false when already at the first one
    pub fn step_back(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Jump to `index`, clamped to the recorded range
    pub fn seek(&mut self, index: usize) -> usize {
        self.cursor = index.min(self.result.snapshots.last_index());
        self.cursor
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn finish(&mut self) {
        self.cursor = self.result.snapshots.last_index();
    }

    /// Distance table at the cursor
    pub fn current_table(&self) -> DistanceMap {
        self.result
            .snapshots
            .resolve(self.cursor)
            .unwrap_or_default()
    }

    /// Node relaxed at the cursor, if any
    pub fn current_change(&self) -> Option<(String, Distance)> {
        self.result.snapshots.change_at(self.cursor)
    }

    /// Select a new source: re-runs the engine and restarts the replay
    pub fn set_source(&mut self, source: &str) -> Result<()> {
        self.result = dijkstra::run(&self.graph, source)?;
        self.source = source.to_string();
        self.cursor = 0;
        debug!(source, snapshots = self.len(), "session_source_changed");
        Ok(())
    }

    /// Select (or clear) the path target
    pub fn set_target(&mut self, target: Option<&str>) -> Result<()> {
        if let Some(node) = target {
            if !self.graph.contains(node) {
                return Err(PathtraceError::node_not_found(node));
            }
        }
        self.target = target.map(str::to_string);
        Ok(())
    }

    /// Replace the graph; the previous run and target are discarded
    pub fn load_graph(&mut self, graph: Graph, source: &str) -> Result<()> {
        let result = dijkstra::run(&graph, source)?;
        self.graph = graph;
        self.result = result;
        self.source = source.to_string();
        self.target = None;
        self.cursor = 0;
        debug!(source, nodes = self.graph.node_count(), "session_graph_loaded");
        Ok(())
    }

    /// Path from the source to the selected target; `None` without a target
    pub fn shortest_path(&self) -> Option<Result<Vec<String>>> {
        self.target
            .as_deref()
            .map(|target| self.result.path_to(target))
    }
}
