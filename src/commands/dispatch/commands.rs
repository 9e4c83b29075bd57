//! Command implementations for all pathtrace commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use pathtrace_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::GraphArgs;
    use crate::commands::{explore, graph, path, replay, run, sample};
    use pathtrace_core::bail_usage;
    use pathtrace_core::trace_time;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Run { graph, source } => execute_run(ctx, graph, &source.source),
            Commands::Path {
                graph,
                source,
                target,
            } => execute_path(ctx, graph, &source.source, target),
            Commands::Replay {
                graph,
                source,
                step,
            } => execute_replay(ctx, graph, &source.source, *step),
            Commands::Explore {
                graph,
                source,
                target,
            } => execute_explore(ctx, graph, &source.source, target.as_deref()),
            Commands::Graph { graph } => execute_graph(ctx, graph),
            Commands::Sample => sample::execute(ctx.cli),
        }
    }

    fn execute_run(ctx: &CommandContext, args: &GraphArgs, source: &str) -> Result<()> {
        let graph = ctx.load_graph(args)?;
        run::execute(ctx.cli, &graph, source, ctx.precision())
    }

    fn execute_path(
        ctx: &CommandContext,
        args: &GraphArgs,
        source: &str,
        target: &str,
    ) -> Result<()> {
        let graph = ctx.load_graph(args)?;
        path::execute(ctx.cli, &graph, source, target, ctx.precision())
    }

    fn execute_replay(
        ctx: &CommandContext,
        args: &GraphArgs,
        source: &str,
        step: Option<usize>,
    ) -> Result<()> {
        let graph = ctx.load_graph(args)?;
        replay::execute(ctx.cli, &graph, source, step, ctx.precision())
    }

    fn execute_explore(
        ctx: &CommandContext,
        args: &GraphArgs,
        source: &str,
        target: Option<&str>,
    ) -> Result<()> {
        if args.reads_stdin() {
            bail_usage!("explore reads its commands from stdin; pass the graph as a file");
        }
        let graph = ctx.load_graph(args)?;
        trace_time!(ctx.start, "explore_start", nodes = graph.node_count());
        explore::execute(ctx.cli, graph, source, target, ctx.precision())
    }

    fn execute_graph(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
        let graph = ctx.load_graph(args)?;
        graph::execute(ctx.cli, &graph, ctx.precision())
    }
}
