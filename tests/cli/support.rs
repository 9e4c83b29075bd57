use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

use pathtrace_core::parse::SAMPLE_GRAPH;

/// Directed reading of the demo graph
pub const DIRECTED_GRAPH: &str = r#"digraph G {
  A -> B [weight=3];
  B -> D [weight=3.5];
  B -> E [weight=2.8];
  C -> A [weight=3];
  C -> E [weight=2.8];
  C -> F [weight=3.5];
  D -> C [weight=9];
  D -> G [weight=10];
  E -> G [weight=7];
  F -> G [weight=2.5];
}
"#;

/// Get a Command for pathtrace, isolated from the user's config and log env
pub fn pathtrace() -> Command {
    let mut cmd = cargo_bin_cmd!("pathtrace");
    cmd.env("PATHTRACE_CONFIG_DIR", "/nonexistent/pathtrace-test-config")
        .env_remove("RUST_LOG")
        .env_remove("PATHTRACE_LOG");
    cmd
}

/// Write `contents` to `dir/name` and return the path
pub fn write_graph(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Write the demo graph (undirected) into `dir`
pub fn sample_graph(dir: &Path) -> PathBuf {
    write_graph(dir, "sample.dot", SAMPLE_GRAPH)
}

/// Write the directed demo graph into `dir`
pub fn directed_graph(dir: &Path) -> PathBuf {
    write_graph(dir, "directed.dot", DIRECTED_GRAPH)
}

/// Parse stdout of a `--format json` run
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
