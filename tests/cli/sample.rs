use crate::cli::support::{pathtrace, stdout_json};
use pathtrace_core::parse::SAMPLE_GRAPH;
use predicates::prelude::*;

// ============================================================================
// sample command tests
// ============================================================================

#[test]
fn test_sample_prints_description() {
    pathtrace()
        .arg("sample")
        .assert()
        .success()
        .stdout(SAMPLE_GRAPH)
        .stdout(predicate::str::contains("A -- B [weight=3];"));
}

#[test]
fn test_sample_json_lists_nodes_in_order_of_appearance() {
    let output = pathtrace()
        .args(["--format", "json", "sample"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["variant"], "undirected");
    assert_eq!(
        json["nodes"],
        serde_json::json!(["A", "B", "D", "E", "C", "F", "G"])
    );
    assert_eq!(json["edges"].as_array().unwrap().len(), 10);
    assert_eq!(json["description"], SAMPLE_GRAPH);
}

#[test]
fn test_sample_pipes_into_run() {
    let sample = pathtrace().arg("sample").output().unwrap();
    assert!(sample.status.success());

    pathtrace()
        .args(["path", "-", "--source", "A", "--target", "G"])
        .write_stdin(sample.stdout)
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C -> F -> G"));
}
