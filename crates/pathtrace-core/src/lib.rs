//! Pathtrace Core Library
//!
//! Instrumented Dijkstra over small weighted graphs: distances,
//! predecessors, a replayable snapshot history and path reconstruction.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod parse;
pub mod session;
