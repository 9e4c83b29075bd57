use crate::cli::support::{pathtrace, sample_graph, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// replay command tests
// ============================================================================

#[test]
fn test_replay_all_steps() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    let output = pathtrace()
        .arg("replay")
        .arg(&file)
        .args(["--source", "B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Replaying 8 snapshots from B (undirected)"));
    let steps: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("Step "))
        .collect();
    assert_eq!(
        steps,
        vec![
            "Step 0/7: initial",
            "Step 1/7: B = 0",
            "Step 2/7: A = 3",
            "Step 3/7: D = 3.5",
            "Step 4/7: E = 2.8",
            "Step 5/7: C = 5.6",
            "Step 6/7: G = 9.8",
            "Step 7/7: F = 9.1",
        ]
    );
}

#[test]
fn test_replay_single_step_resolves_table() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .arg("replay")
        .arg(&file)
        .args(["--source", "B", "--step", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Step 2/7: A = 3\n"))
        .stdout(predicate::str::contains("A     3\n"))
        .stdout(predicate::str::contains("B     0\n"))
        .stdout(predicate::str::contains("G     \u{221E}\n"));
}

#[test]
fn test_replay_step_out_of_range() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .arg("replay")
        .arg(&file)
        .args(["--source", "B", "--step", "8"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_replay_json() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    let output = pathtrace()
        .args(["--format", "json", "replay"])
        .arg(&file)
        .args(["--source", "B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["snapshots"], 8);
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 8);
    assert!(steps[0]["changed"].is_null());
    assert_eq!(steps[0]["recorded"].as_object().unwrap().len(), 7);
    assert_eq!(steps[1]["changed"]["node"], "B");
    assert_eq!(steps[1]["recorded"], serde_json::json!({ "B": 0.0 }));
    assert!(steps[1]["table"]["A"].is_null());
    assert_eq!(steps[7]["changed"]["node"], "F");
    assert_eq!(steps[7]["recorded"].as_object().unwrap().len(), 7);
}

#[test]
fn test_replay_records() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .args(["--format", "records", "replay"])
        .arg(&file)
        .args(["--source", "B", "--step", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H pathtrace=1 records=1 mode=replay source=B snapshots=8\nS 1 B 0\n",
        ))
        .stdout(predicate::str::contains("D A inf\n"));
}
