pub mod dispatch;
pub mod explore;
pub mod format;
pub mod graph;
pub mod helpers;
pub mod path;
pub mod replay;
pub mod run;
pub mod sample;
