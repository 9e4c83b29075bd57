use crate::cli::support::{directed_graph, pathtrace, sample_graph, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// path command tests
// ============================================================================

#[test]
fn test_path_through_e() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .arg("path")
        .arg(&file)
        .args(["--source", "B", "--target", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B -> E -> C -> F"))
        .stdout(predicate::str::contains("Total weight: 9.1"));
}

#[test]
fn test_path_quiet_prints_only_the_path() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .arg("--quiet")
        .arg("path")
        .arg(&file)
        .args(["--source", "B", "--target", "F"])
        .assert()
        .success()
        .stdout("B -> E -> C -> F\n");
}

#[test]
fn test_path_to_self() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .arg("path")
        .arg(&file)
        .args(["--source", "C", "--target", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C\nTotal weight: 0"));
}

#[test]
fn test_path_directed() {
    let dir = tempdir().unwrap();
    let file = directed_graph(dir.path());

    pathtrace()
        .arg("path")
        .arg(&file)
        .args(["--source", "B", "--target", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B -> D -> C -> A"))
        .stdout(predicate::str::contains("Total weight: 15.5"));
}

#[test]
fn test_path_unreachable() {
    let dir = tempdir().unwrap();
    let file = directed_graph(dir.path());

    pathtrace()
        .arg("path")
        .arg(&file)
        .args(["--source", "E", "--target", "A"])
        .assert()
        .success()
        .stdout("No path from E to A\n");
}

#[test]
fn test_path_unreachable_json() {
    let dir = tempdir().unwrap();
    let file = directed_graph(dir.path());

    let output = pathtrace()
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["--source", "E", "--target", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
    assert!(json["weight"].is_null());
}

#[test]
fn test_path_json() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    let output = pathtrace()
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["--source", "B", "--target", "F"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!(["B", "E", "C", "F"]));
    let weight = json["weight"].as_f64().unwrap();
    assert!((weight - 9.1).abs() < 1e-9);
}

#[test]
fn test_path_records() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .args(["--format", "records", "path"])
        .arg(&file)
        .args(["--source", "B", "--target", "G"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H pathtrace=1 records=1 mode=path source=B target=G found=true",
        ))
        .stdout(predicate::str::contains("P B E G weight=9.8"));
}

#[test]
fn test_path_unknown_target() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .arg("path")
        .arg(&file)
        .args(["--source", "B", "--target", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Z"));
}
