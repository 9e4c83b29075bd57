//! `pathtrace replay` command - walk the recorded snapshots

use std::io::{self, Write};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{describe_change, write_distance_records, write_distance_table};
use pathtrace_core::bail_usage;
use pathtrace_core::error::Result;
use pathtrace_core::format::records_header;
use pathtrace_core::graph::{self, Graph, ShortestPaths};

/// Execute the replay command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    source: &str,
    step: Option<usize>,
    precision: usize,
) -> Result<()> {
    let result = graph::run(graph, source)?;
    let last = result.snapshots.last_index();

    let steps: Vec<usize> = match step {
        Some(index) if index > last => {
            bail_usage!(format!(
                "step {} is out of range (snapshots 0..={} from {})",
                index, last, source
            ))
        }
        Some(index) => vec![index],
        None => (0..=last).collect(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = steps
                .iter()
                .map(|&index| step_json(&result, index))
                .collect();
            let output = serde_json::json!({
                "source": result.source,
                "variant": graph.variant(),
                "snapshots": result.snapshots.len(),
                "steps": entries,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Human => {
            if !cli.quiet && step.is_none() {
                writeln!(
                    out,
                    "Replaying {} snapshots from {} ({})",
                    result.snapshots.len(),
                    result.source,
                    graph.variant()
                )?;
                writeln!(out)?;
            }
            print_steps_human(&mut out, &result, &steps, precision)?;
        }
        OutputFormat::Records => {
            writeln!(
                out,
                "{}",
                records_header(
                    "replay",
                    &[
                        ("source", result.source.clone()),
                        ("snapshots", result.snapshots.len().to_string()),
                    ]
                )
            )?;
            print_steps_records(&mut out, &result, &steps, precision)?;
        }
    }

    Ok(())
}

fn print_steps_human<W: Write>(
    out: &mut W,
    result: &ShortestPaths,
    steps: &[usize],
    precision: usize,
) -> Result<()> {
    let last = result.snapshots.last_index();
    for (i, &index) in steps.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let change = result.snapshots.change_at(index);
        writeln!(
            out,
            "Step {}/{}: {}",
            index,
            last,
            describe_change(change.as_ref(), precision)
        )?;
        let table = result.snapshots.resolve(index).unwrap_or_default();
        write_distance_table(out, &table, None, precision)?;
    }
    Ok(())
}

fn print_steps_records<W: Write>(
    out: &mut W,
    result: &ShortestPaths,
    steps: &[usize],
    precision: usize,
) -> Result<()> {
    for &index in steps {
        match result.snapshots.change_at(index) {
            Some((node, distance)) => writeln!(
                out,
                "S {} {} {}",
                index,
                node,
                distance.format_ascii(precision)
            )?,
            None => writeln!(out, "S {} - -", index)?,
        }
        let table = result.snapshots.resolve(index).unwrap_or_default();
        write_distance_records(out, &table, None, precision)?;
    }
    Ok(())
}

fn step_json(result: &ShortestPaths, index: usize) -> serde_json::Value {
    let changed = result
        .snapshots
        .change_at(index)
        .map(|(node, distance)| serde_json::json!({ "node": node, "distance": distance }));
    serde_json::json!({
        "step": index,
        "changed": changed,
        "recorded": result.snapshots.get(index),
        "table": result.snapshots.resolve(index),
    })
}
