pub mod errors;
pub mod graph;
pub mod misc;
pub mod path;
pub mod replay;
pub mod sample;
pub mod support;
