//! Graph algorithm implementations
//!
//! - `dijkstra`: instrumented single-source shortest paths
//! - `path`: predecessor back-tracking and path weights

pub mod dijkstra;
pub mod path;

pub use dijkstra::{run, HeapEntry, ShortestPaths};
pub use path::{path_weight, reconstruct_path, shortest_path};
