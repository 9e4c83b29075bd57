use crate::cli::support::{pathtrace, sample_graph, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Exit codes and error envelopes
// ============================================================================

fn stderr_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).unwrap()
}

#[test]
fn test_unknown_source_is_data_error() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .arg("run")
        .arg(&file)
        .args(["--source", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: unknown source node: Z"));
}

#[test]
fn test_unknown_source_json_envelope() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    let output = pathtrace()
        .args(["--format", "json", "run"])
        .arg(&file)
        .args(["--source", "Z"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "unknown_source");
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .args(["--quiet", "run"])
        .arg(&file)
        .args(["--source", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_file_is_failure() {
    let dir = tempdir().unwrap();

    let output = pathtrace()
        .args(["--format", "json", "run"])
        .arg(dir.path().join("missing.dot"))
        .args(["--source", "B"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_json(&output)["error"]["type"], "io_error");
}

#[test]
fn test_missing_argument_json_envelope() {
    let output = pathtrace()
        .args(["--format", "json", "run", "--source", "B"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_json(&output)["error"]["type"], "usage_error");
}

#[test]
fn test_conflicting_variant_flags() {
    let dir = tempdir().unwrap();
    let file = sample_graph(dir.path());

    pathtrace()
        .arg("run")
        .arg(&file)
        .args(["--source", "B", "--directed", "--undirected"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_format_value() {
    pathtrace()
        .args(["--format", "xml", "sample"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_config_precision() {
    let dir = tempdir().unwrap();
    let config = write_graph(dir.path(), "config.toml", "[display]\nprecision = 99\n");

    pathtrace()
        .arg("--config")
        .arg(&config)
        .arg("sample")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid display.precision: 99"));
}

#[test]
fn test_malformed_config() {
    let dir = tempdir().unwrap();
    let config = write_graph(dir.path(), "config.toml", "[display\nprecision = ");

    pathtrace()
        .arg("--config")
        .arg(&config)
        .arg("sample")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
