//! Command dispatch logic for pathtrace

use std::time::Instant;

use crate::cli::Cli;
use pathtrace_core::config::Config;
use pathtrace_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    debug!(
        elapsed = ?start.elapsed(),
        variant = %config.graph.variant,
        precision = config.display.precision,
        "load_config"
    );

    let ctx = CommandContext::new(cli, &config, start);

    // Execute command
    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    debug!(elapsed = ?start.elapsed(), ok = result.is_ok(), "execute_command");
    result
}
