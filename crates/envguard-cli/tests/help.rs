use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the envguard binary.
#[allow(deprecated)]
fn envguard_cmd() -> Command {
    Command::cargo_bin("envguard").unwrap()
}

#[test]
fn help_works() {
    envguard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("presets"));
}

#[test]
fn validate_help_lists_options() {
    envguard_cmd()
        .args(["validate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--strict-example"))
        .stdout(predicate::str::contains("--env-file"))
        .stdout(predicate::str::contains("--preset"));
}

#[test]
fn unknown_format_is_a_usage_error() {
    envguard_cmd()
        .args(["validate", "--format", "yaml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("yaml"));
}
