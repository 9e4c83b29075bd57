//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, GraphArgs};
use crate::commands::helpers;
use pathtrace_core::config::Config;
use pathtrace_core::error::Result;
use pathtrace_core::graph::Graph;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Load the graph named on the command line
    pub fn load_graph(&self, args: &GraphArgs) -> Result<Graph> {
        helpers::load_graph(args, self.config)
    }

    /// Decimals used for rendered distances
    pub fn precision(&self) -> usize {
        self.config.display.precision
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathtrace {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step replay of Dijkstra's shortest-path algorithm.");
        println!();
        println!("Run `pathtrace --help` for usage information.");
        Ok(())
    }
}
