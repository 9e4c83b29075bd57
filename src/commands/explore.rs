//! `pathtrace explore` command - step through snapshots interactively
//!
//! Reads one command per line and redraws the view after every change.
//! A failing command is reported on stderr; the loop keeps going until
//! `quit` or end of input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{describe_change, write_distance_records, write_distance_table};
use crate::commands::helpers::format_path;
use pathtrace_core::bail_usage;
use pathtrace_core::error::{PathtraceError, Result};
use pathtrace_core::graph::{Distance, DistanceMap, Graph};
use pathtrace_core::session::Session;
use serde::Serialize;
use tracing::debug;

const HELP: &str = "\
Commands:
  next | n          advance one snapshot
  prev              go back one snapshot
  first             jump to the initial table
  last              jump to the final table
  goto N            jump to snapshot N
  source X          re-run from node X
  target [X]        select (or clear) the path target
  path              print the path to the target
  show              redraw the current snapshot
  help              this list
  quit | q          leave";

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Next,
    Prev,
    First,
    Last,
    Goto(usize),
    Source(String),
    Target(Option<String>),
    Path,
    Show,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = PathtraceError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            bail_usage!(format!("too many arguments: '{}'", line));
        }

        let action = match (command.as_str(), arg) {
            ("next" | "n", None) => Action::Next,
            ("prev", None) => Action::Prev,
            ("first", None) => Action::First,
            ("last", None) => Action::Last,
            ("goto", Some(step)) => Action::Goto(
                step.parse()
                    .map_err(|_| PathtraceError::invalid_value("step", step))?,
            ),
            ("source", Some(node)) => Action::Source(node.to_string()),
            ("target", node) => Action::Target(node.map(str::to_string)),
            ("path", None) => Action::Path,
            ("show", None) => Action::Show,
            ("help" | "?", None) => Action::Help,
            ("quit" | "exit" | "q", None) => Action::Quit,
            _ => bail_usage!(format!("unknown command '{}' (type `help`)", line)),
        };
        Ok(action)
    }
}

/// One JSON line per redraw
#[derive(Serialize)]
struct SnapshotView<'a> {
    source: &'a str,
    target: Option<&'a str>,
    step: usize,
    last: usize,
    changed: Option<Change>,
    table: DistanceMap,
    path: Option<Vec<String>>,
}

#[derive(Serialize)]
struct Change {
    node: String,
    distance: Distance,
}

/// Rendering options for the loop
struct View {
    format: OutputFormat,
    quiet: bool,
    precision: usize,
}

/// Execute the explore command
pub fn execute(
    cli: &Cli,
    graph: Graph,
    source: &str,
    target: Option<&str>,
    precision: usize,
) -> Result<()> {
    let mut session = Session::new(graph, source)?;
    session.set_target(target)?;

    let view = View {
        format: cli.format,
        quiet: cli.quiet,
        precision,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    explore_loop(
        &mut session,
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        &view,
    )
}

fn explore_loop<R: BufRead, W: Write, E: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    err: &mut E,
    view: &View,
) -> Result<()> {
    if view.format == OutputFormat::Human && !view.quiet {
        writeln!(
            out,
            "Exploring {} snapshots from {}. Type `help` for commands.",
            session.len(),
            session.source()
        )?;
    }
    render(out, session, view)?;

    let mut commands = 0usize;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        commands += 1;

        let outcome = line
            .parse::<Action>()
            .and_then(|action| apply(session, action, out, view));
        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => report(err, &e, view)?,
        }
    }

    debug!(commands, cursor = session.cursor(), "explore_finished");
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

fn apply<W: Write>(session: &mut Session, action: Action, out: &mut W, view: &View) -> Result<Flow> {
    match action {
        Action::Next => {
            if !session.step_forward() {
                note(out, view, "Already at the last snapshot")?;
                return Ok(Flow::Continue);
            }
        }
        Action::Prev => {
            if !session.step_back() {
                note(out, view, "Already at the first snapshot")?;
                return Ok(Flow::Continue);
            }
        }
        Action::First => session.rewind(),
        Action::Last => session.finish(),
        Action::Goto(step) => {
            let reached = session.seek(step);
            if reached != step {
                note(
                    out,
                    view,
                    &format!("Snapshot {} does not exist; showing {}", step, reached),
                )?;
            }
        }
        Action::Source(node) => session.set_source(&node)?,
        Action::Target(node) => session.set_target(node.as_deref())?,
        Action::Path => {
            write_path(out, session, view)?;
            return Ok(Flow::Continue);
        }
        Action::Show => {}
        Action::Help => {
            writeln!(out, "{}", HELP)?;
            return Ok(Flow::Continue);
        }
        Action::Quit => return Ok(Flow::Quit),
    }
    render(out, session, view)?;
    Ok(Flow::Continue)
}

fn note<W: Write>(out: &mut W, view: &View, message: &str) -> Result<()> {
    if view.format == OutputFormat::Human {
        writeln!(out, "{}", message)?;
    }
    Ok(())
}

fn report<E: Write>(err: &mut E, error: &PathtraceError, view: &View) -> Result<()> {
    if view.format == OutputFormat::Json {
        writeln!(err, "{}", error.to_json())?;
    } else {
        writeln!(err, "error: {}", error)?;
    }
    Ok(())
}

/// Draw the snapshot under the cursor
fn render<W: Write>(out: &mut W, session: &Session, view: &View) -> Result<()> {
    let change = session.current_change();
    let table = session.current_table();
    let last = session.result().snapshots.last_index();

    match view.format {
        OutputFormat::Json => {
            let path = match session.shortest_path() {
                Some(path) => Some(path?),
                None => None,
            };
            let output = SnapshotView {
                source: session.source(),
                target: session.target(),
                step: session.cursor(),
                last,
                changed: change.map(|(node, distance)| Change { node, distance }),
                table,
                path,
            };
            writeln!(out, "{}", serde_json::to_string(&output)?)?;
        }
        OutputFormat::Human => {
            writeln!(
                out,
                "Step {}/{}: {}",
                session.cursor(),
                last,
                describe_change(change.as_ref(), view.precision)
            )?;
            write_distance_table(out, &table, None, view.precision)?;
            if session.target().is_some() {
                write_path(out, session, view)?;
            }
        }
        OutputFormat::Records => {
            match &change {
                Some((node, distance)) => writeln!(
                    out,
                    "S {} {} {}",
                    session.cursor(),
                    node,
                    distance.format_ascii(view.precision)
                )?,
                None => writeln!(out, "S {} - -", session.cursor())?,
            }
            write_distance_records(out, &table, None, view.precision)?;
            if session.target().is_some() {
                write_path(out, session, view)?;
            }
        }
    }
    Ok(())
}

fn write_path<W: Write>(out: &mut W, session: &Session, view: &View) -> Result<()> {
    let (target, path) = match (session.target(), session.shortest_path()) {
        (Some(target), Some(path)) => (target, path?),
        _ => bail_usage!("no target selected (use `target X`)"),
    };
    let weight = session.result().distance(target);
    let found = !path.is_empty();

    match view.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": session.source(),
                "target": target,
                "found": found,
                "path": path,
                "weight": found.then_some(weight),
            });
            writeln!(out, "{}", serde_json::to_string(&output)?)?;
        }
        OutputFormat::Human if !found => {
            writeln!(out, "No path from {} to {}", session.source(), target)?;
        }
        OutputFormat::Human => {
            writeln!(
                out,
                "Path to {}: {} ({})",
                target,
                format_path(&path),
                weight.format(view.precision)
            )?;
        }
        OutputFormat::Records if !found => {}
        OutputFormat::Records => {
            writeln!(
                out,
                "P {} weight={}",
                path.join(" "),
                weight.format_ascii(view.precision)
            )?;
        }
    }
    Ok(())
}
