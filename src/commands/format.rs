//! Table and record rendering shared by the commands
//!
//! Every writer takes an `io::Write` so the interactive loop can render into
//! any sink.

use std::io::{self, Write};

use pathtrace_core::graph::{Distance, DistanceMap, PredecessorMap};

const NODE_HEADER: &str = "Node";
const DISTANCE_HEADER: &str = "Distance";
const PREVIOUS_HEADER: &str = "Previous";
const NONE_MARKER: &str = "-";

/// Human table of distances, with a predecessor column when given
pub fn write_distance_table<W: Write>(
    out: &mut W,
    distances: &DistanceMap,
    predecessors: Option<&PredecessorMap>,
    precision: usize,
) -> io::Result<()> {
    let rendered: Vec<(&str, String)> = distances
        .iter()
        .map(|(node, distance)| (node.as_str(), distance.format(precision)))
        .collect();

    let node_width = rendered
        .iter()
        .map(|(node, _)| node.chars().count())
        .max()
        .unwrap_or(0)
        .max(NODE_HEADER.len());
    let distance_width = rendered
        .iter()
        .map(|(_, d)| d.chars().count())
        .max()
        .unwrap_or(0)
        .max(DISTANCE_HEADER.len());

    match predecessors {
        Some(_) => writeln!(
            out,
            "{:<nw$}  {:<dw$}  {}",
            NODE_HEADER,
            DISTANCE_HEADER,
            PREVIOUS_HEADER,
            nw = node_width,
            dw = distance_width
        )?,
        None => writeln!(out, "{:<nw$}  {}", NODE_HEADER, DISTANCE_HEADER, nw = node_width)?,
    }

    for (node, distance) in &rendered {
        match predecessors {
            Some(preds) => {
                let previous = preds
                    .get(*node)
                    .and_then(|p| p.as_deref())
                    .unwrap_or(NONE_MARKER);
                writeln!(
                    out,
                    "{:<nw$}  {:<dw$}  {}",
                    node,
                    distance,
                    previous,
                    nw = node_width,
                    dw = distance_width
                )?;
            }
            None => writeln!(out, "{:<nw$}  {}", node, distance, nw = node_width)?,
        }
    }
    Ok(())
}

/// `D <node> <distance> [<previous>]` records
pub fn write_distance_records<W: Write>(
    out: &mut W,
    distances: &DistanceMap,
    predecessors: Option<&PredecessorMap>,
    precision: usize,
) -> io::Result<()> {
    for (node, distance) in distances {
        let distance = distance.format_ascii(precision);
        match predecessors {
            Some(preds) => {
                let previous = preds
                    .get(node)
                    .and_then(|p| p.as_deref())
                    .unwrap_or(NONE_MARKER);
                writeln!(out, "D {} {} {}", node, distance, previous)?;
            }
            None => writeln!(out, "D {} {}", node, distance)?,
        }
    }
    Ok(())
}

/// Short description of a relaxation: `E = 2.8`
pub fn describe_change(change: Option<&(String, Distance)>, precision: usize) -> String {
    match change {
        Some((node, distance)) => format!("{} = {}", node, distance.format(precision)),
        None => "initial".to_string(),
    }
}
