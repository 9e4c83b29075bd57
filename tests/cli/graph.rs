use crate::cli::support::{directed_graph, pathtrace, sample_graph, stdout_json, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// graph command tests
// ============================================================================

#[test]
fn test_graph_human() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .arg("graph")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph (undirected, 7 nodes, 10 edges)"))
        .stdout(predicate::str::contains("Nodes: A B C D E F G"))
        .stdout(predicate::str::contains("  A -- B  3\n"))
        .stdout(predicate::str::contains("  C -- D  9\n"))
        .stdout(predicate::str::contains("  F -- G  2.5\n"));
}

#[test]
fn test_graph_directed_keeps_arc_direction() {
    let dir = tempdir().unwrap();
    let file = directed_graph(dir.path());

    pathtrace()
        .arg("graph")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph (directed, 7 nodes, 10 edges)"))
        .stdout(predicate::str::contains("  D -> C  9\n"));
}

#[test]
fn test_graph_omits_self_loops() {
    let dir = tempdir().unwrap();
    let file = write_graph(
        dir.path(),
        "loop.dot",
        "graph G {\n  A -- A [weight=1];\n  A -- B [weight=2];\n}\n",
    );

    let output = pathtrace()
        .args(["--format", "json", "graph"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["nodes"], serde_json::json!(["A", "B"]));
    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["from"], "A");
    assert_eq!(edges[0]["to"], "B");
}

#[test]
fn test_graph_records() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .args(["--format", "records", "graph"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H pathtrace=1 records=1 mode=graph variant=undirected nodes=7 edges=10\n",
        ))
        .stdout(predicate::str::contains("N A\n"))
        .stdout(predicate::str::contains("E B -- E 2.8\n"));
}

#[test]
fn test_graph_forced_variant_without_matching_edges_is_empty() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .arg("graph")
        .arg(&file)
        .arg("--directed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph (directed, 0 nodes, 0 edges)"))
        .stderr(predicate::str::contains("no edges found"));
}
