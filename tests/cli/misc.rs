use crate::cli::support::pathtrace;
use predicates::prelude::*;

// ============================================================================
// Help, version and banner
// ============================================================================

#[test]
fn test_help_flag() {
    pathtrace()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathtrace"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("explore"));
}

#[test]
fn test_version_flag() {
    pathtrace()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathtrace"));
}

#[test]
fn test_no_command_prints_banner() {
    pathtrace()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "pathtrace {}",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("pathtrace --help"));
}
