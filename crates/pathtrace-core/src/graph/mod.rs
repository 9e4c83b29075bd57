//! Graph model and shortest-path operations
//!
//! Provides:
//! - An adjacency-map graph, directed or undirected
//! - Dijkstra with a replayable snapshot history
//! - Shortest-path reconstruction from predecessors

pub mod algos;
pub mod model;
pub mod snapshot;
pub mod types;

pub use algos::{path_weight, run, shortest_path, ShortestPaths};
pub use model::Graph;
pub use snapshot::{Snapshot, Snapshots};
pub use types::{Distance, DistanceMap, EdgeSpec, PredecessorMap, Variant, DEFAULT_PRECISION};
