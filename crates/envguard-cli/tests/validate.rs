//! End-to-end tests for `envguard validate` and `envguard presets`.
//!
//! Each test builds a throwaway project directory with an `envguard.toml` and optional
//! env files, then runs the binary with a controlled process environment.

use assert_cmd::Command;
use envguard_test_util::{normalize_nondeterministic, redact_in_strings};
use predicates::prelude::*;
use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;

/// Variables the tests assert on; removed from the inherited environment.
const TEST_KEYS: &[&str] = &[
    "APP_NAME",
    "APP_ENV",
    "REQUIRED_FROM_RULES",
    "STRICT_ONLY",
    "STANDARD_ONLY",
    "ENVGUARD_LOG",
];

#[allow(deprecated)]
fn envguard_cmd(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("envguard").expect("envguard binary not found");
    cmd.arg("--project-root").arg(project);
    for key in TEST_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

fn project(config: &str) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    std::fs::write(tmp.path().join("envguard.toml"), config).expect("write config");
    tmp
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

const CUSTOM_APP_NAME: &str = r#"
preset = "custom"
check_env_example = false

[rules]
APP_NAME = ["required", "string"]
"#;

#[test]
fn fails_when_no_rules_are_configured() {
    let tmp = project("preset = \"custom\"\n");

    envguard_cmd(tmp.path())
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid environment configuration:"))
        .stdout(predicate::str::contains(
            "- _rules: No rules resolved. Configure a preset or add rules in envguard.toml",
        ));
}

#[test]
fn fails_when_required_value_is_missing() {
    let tmp = project(CUSTOM_APP_NAME);

    envguard_cmd(tmp.path())
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid environment configuration:"))
        .stdout(predicate::str::contains(
            "- APP_NAME: The APP_NAME field is required.",
        ));
}

#[test]
fn passes_when_environment_matches_rules() {
    let tmp = project(CUSTOM_APP_NAME);

    envguard_cmd(tmp.path())
        .arg("validate")
        .env("APP_NAME", "Demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Environment configuration OK (preset: custom, source: runtime)",
        ));
}

#[test]
fn outputs_json_envelope_when_requested() {
    let tmp = project(CUSTOM_APP_NAME);

    let output = envguard_cmd(tmp.path())
        .args(["validate", "--json"])
        .env("APP_NAME", "Demo")
        .output()
        .expect("run envguard");
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("\"ok\": true"));
    assert!(text.contains("\"preset\": \"custom\""));
    assert!(text.contains("\"warnings\": []"));

    let report = normalize_nondeterministic(stdout_json(&output));
    assert_eq!(
        report,
        json!({
            "schema": "envguard.report.v1",
            "tool": { "name": "envguard", "version": "__VERSION__" },
            "run": {
                "started_at": "__TIMESTAMP__",
                "ended_at": "__TIMESTAMP__",
                "duration_ms": 0
            },
            "ok": true,
            "preset": "custom",
            "source": "runtime",
            "warnings": []
        })
    );
}

#[test]
fn json_failure_lists_errors_by_key() {
    let tmp = project(CUSTOM_APP_NAME);

    let output = envguard_cmd(tmp.path())
        .args(["validate", "--format", "json"])
        .output()
        .expect("run envguard");
    assert_eq!(output.status.code(), Some(2));

    let report = stdout_json(&output);
    assert_eq!(report["ok"], false);
    assert_eq!(
        report["errors"],
        json!({ "APP_NAME": ["The APP_NAME field is required."] })
    );
}

#[test]
fn strict_example_fails_on_missing_example_keys() {
    let tmp = project(
        r#"
preset = "custom"
check_env_example = true

[rules]
REQUIRED_FROM_RULES = ["required", "string"]
"#,
    );
    std::fs::write(tmp.path().join(".env.example"), "APP_NAME=\n").expect("write example");

    envguard_cmd(tmp.path())
        .args(["validate", "--strict-example"])
        .env("REQUIRED_FROM_RULES", "Demo")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Environment configuration OK"))
        .stdout(predicate::str::contains(
            "- REQUIRED_FROM_RULES is in rules but missing from .env.example",
        ));

    envguard_cmd(tmp.path())
        .arg("validate")
        .env("REQUIRED_FROM_RULES", "Demo")
        .assert()
        .success();
}

#[test]
fn fails_for_unknown_preset() {
    let tmp = project("preset = \"unknown\"\n");

    envguard_cmd(tmp.path())
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid environment configuration:"))
        .stdout(predicate::str::contains(
            "- _preset: Unknown preset \"unknown\". Available presets: standard, strict, custom",
        ));
}

#[test]
fn uses_selected_preset_and_allows_overrides() {
    let tmp = project(
        r#"
preset = "standard"
check_env_example = false

[presets.standard]
APP_ENV = ["required", "in:production"]

[rules]
APP_ENV = ["required", "in:local,production"]
"#,
    );

    envguard_cmd(tmp.path())
        .arg("validate")
        .env("APP_ENV", "local")
        .assert()
        .success()
        .stdout(predicate::str::contains("preset: standard"));
}

#[test]
fn cli_preset_overrides_config() {
    let tmp = project(
        r#"
preset = "standard"
check_env_example = false

[presets.standard]
STANDARD_ONLY = ["required", "string"]

[presets.strict]
STRICT_ONLY = ["required", "string"]
"#,
    );

    envguard_cmd(tmp.path())
        .args(["validate", "--preset=strict"])
        .env("STRICT_ONLY", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("preset: strict"));
}

#[test]
fn validates_a_specific_env_file() {
    let tmp = project(CUSTOM_APP_NAME);
    std::fs::write(tmp.path().join(".env.testing"), "APP_NAME=FromTesting\n")
        .expect("write env file");

    envguard_cmd(tmp.path())
        .args(["validate", "--env-file", ".env.testing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source:"))
        .stdout(predicate::str::contains(".env.testing)"));
}

#[test]
fn fails_when_selected_env_file_does_not_exist() {
    let tmp = project(CUSTOM_APP_NAME);

    let output = envguard_cmd(tmp.path())
        .args(["validate", "--json", "--env-file", ".env.missing"])
        .output()
        .expect("run envguard");
    assert_eq!(output.status.code(), Some(2));

    let root = tmp
        .path()
        .canonicalize()
        .expect("canonical root")
        .to_string_lossy()
        .into_owned();
    let report = redact_in_strings(stdout_json(&output), &root, "<ROOT>");
    assert_eq!(
        report["errors"],
        json!({ "_env_file": ["Environment file not found: <ROOT>/.env.missing"] })
    );
    assert_eq!(report["source"], "<ROOT>/.env.missing");
}

#[test]
fn github_format_emits_annotations() {
    let tmp = project(CUSTOM_APP_NAME);

    envguard_cmd(tmp.path())
        .args(["validate", "--format", "github"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "::error title=envguard APP_NAME::The APP_NAME field is required.",
        ));
}

#[test]
fn report_out_writes_the_json_envelope() {
    let tmp = project(CUSTOM_APP_NAME);
    let report_path = tmp.path().join("artifacts/envguard/report.json");

    envguard_cmd(tmp.path())
        .arg("validate")
        .arg("--report-out")
        .arg(&report_path)
        .env("APP_NAME", "Demo")
        .assert()
        .success();

    let text = std::fs::read_to_string(&report_path).expect("read report");
    let report: Value = serde_json::from_str(&text).expect("report is JSON");
    assert_eq!(report["schema"], "envguard.report.v1");
    assert_eq!(report["ok"], true);
}

#[test]
fn malformed_config_is_reported_under_config() {
    let tmp = project("preset = [\n");

    envguard_cmd(tmp.path())
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("- _config: Invalid configuration:"));
}

#[test]
fn missing_config_falls_back_to_standard_preset() {
    let tmp = TempDir::new().expect("create temp dir");

    envguard_cmd(tmp.path())
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("- APP_NAME: The APP_NAME field is required."));
}

#[test]
fn missing_project_root_is_a_runtime_error() {
    let tmp = TempDir::new().expect("create temp dir");

    envguard_cmd(&tmp.path().join("does-not-exist"))
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("project root does not exist"));
}

#[test]
fn presets_lists_builtin_configured_and_custom() {
    let tmp = project("[presets.ci]\nCI = [\"required\"]\n");

    envguard_cmd(tmp.path())
        .arg("presets")
        .assert()
        .success()
        .stdout("standard\nstrict\nci\ncustom\n");
}
