//! CLI argument parsing for pathtrace
//!
//! Uses clap. Global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GraphArgs, SourceArgs};
pub use pathtrace_core::format::OutputFormat;

/// Pathtrace - replay Dijkstra's algorithm step by step
#[derive(Parser, Debug)]
#[command(name = "pathtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to ~/.config/pathtrace/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute distances and predecessors from a source node
    Run {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the shortest path between two nodes
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        source: SourceArgs,

        /// Target node
        #[arg(long, short)]
        target: String,
    },

    /// Replay the recorded distance snapshots
    Replay {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        source: SourceArgs,

        /// Show a single step instead of the whole sequence
        #[arg(long)]
        step: Option<usize>,
    },

    /// Step through the snapshots interactively (commands on stdin)
    Explore {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        source: SourceArgs,

        /// Initial target node
        #[arg(long, short)]
        target: Option<String>,
    },

    /// Describe the nodes and edges of a graph
    Graph {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Print the bundled demo graph description
    Sample,
}
