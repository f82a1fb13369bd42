//! The `validate` use case: resolve rules, pick a value source, evaluate, check coverage.

use camino::Utf8Path;
use envguard_domain::source::EnvSource;
use envguard_settings::{EnvguardConfigV1, Overrides, ResolveError, ResolvedConfig};
use envguard_source::{FileEnv, RuntimeEnv};
use envguard_types::ids::{KEY_CONFIG, KEY_ENV_FILE, KEY_PRESET, KEY_RULES, SOURCE_RUNTIME};
use envguard_types::{ErrorMap, RunMeta, SCHEMA_REPORT_V1, ToolMeta, ValidationReport};
use time::OffsetDateTime;

/// Input for the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateInput<'a> {
    /// Project root; relative env/example file paths are joined to it.
    pub project_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Treat coverage advisories as failures for the exit code.
    pub strict_example: bool,
    /// Live environment used when no env file is selected.
    pub runtime: RuntimeEnv,
}

#[derive(Clone, Debug)]
pub struct ValidateOutput {
    pub report: ValidationReport,
    pub exit_code: i32,
    /// Present once rule resolution succeeded.
    pub resolved_config: Option<ResolvedConfig>,
}

/// Run the validate use case.
///
/// Configuration and source failures are reported under pseudo-keys rather than returned as
/// errors; only unexpected failures surface as `Err`.
pub fn run_validate(input: ValidateInput<'_>) -> anyhow::Result<ValidateOutput> {
    let started_at = OffsetDateTime::now_utc();
    let mut run = Run {
        started_at,
        preset: None,
        source: None,
    };

    let cfg = if input.config_text.trim().is_empty() {
        EnvguardConfigV1::default()
    } else {
        match envguard_settings::parse_config_toml(input.config_text) {
            Ok(cfg) => cfg,
            Err(err) => {
                let message = format!("Invalid configuration: {}", err.to_string().trim_end());
                return Ok(run.fail(KEY_CONFIG, message, input.strict_example));
            }
        }
    };

    let resolved = match envguard_settings::resolve_config(&cfg, &input.overrides) {
        Ok(resolved) => resolved,
        Err(err) => {
            let key = match &err {
                ResolveError::UnknownPreset { name, .. } => {
                    run.preset = Some(name.clone());
                    KEY_PRESET
                }
                ResolveError::NoRules { preset } => {
                    run.preset = Some(preset.clone());
                    KEY_RULES
                }
            };
            tracing::debug!(error = %err, "rule resolution failed");
            return Ok(run.fail(key, err.to_string(), input.strict_example));
        }
    };
    run.preset = Some(resolved.preset.clone());
    tracing::debug!(
        preset = %resolved.preset,
        keys = resolved.rules.len(),
        "resolved rules"
    );

    let file_env;
    let source: &dyn EnvSource = match resolved.env_file.clone() {
        Some(env_file) => {
            let path = envguard_source::resolve_path(input.project_root, &env_file);
            run.source = Some(path.to_string());
            file_env = match FileEnv::load(&path) {
                Ok(env) => env,
                Err(err) => {
                    tracing::debug!(error = %err, "env file unavailable");
                    let mut output = run.fail(KEY_ENV_FILE, err.to_string(), input.strict_example);
                    output.resolved_config = Some(resolved);
                    return Ok(output);
                }
            };
            &file_env
        }
        None => {
            run.source = Some(SOURCE_RUNTIME.to_string());
            &input.runtime
        }
    };
    tracing::debug!(source = %source.describe(), "evaluating");

    let outcome = envguard_domain::evaluate(&resolved.rules, source);
    if !outcome.ok {
        tracing::debug!(messages = outcome.message_count(), "validation failed");
        let report = run.report(outcome.errors, Vec::new());
        return Ok(ValidateOutput {
            exit_code: verdict_exit_code(&report, input.strict_example),
            report,
            resolved_config: Some(resolved),
        });
    }

    let warnings = if resolved.check_env_example {
        let path = envguard_source::resolve_path(input.project_root, &resolved.example_file);
        envguard_source::compare_with_env_example(
            resolved.rules.keys(),
            &path,
            &resolved.example_file,
        )
    } else {
        Vec::new()
    };
    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "coverage advisories");
    }

    let report = run.report(ErrorMap::new(), warnings);
    Ok(ValidateOutput {
        exit_code: verdict_exit_code(&report, input.strict_example),
        report,
        resolved_config: Some(resolved),
    })
}

/// 0 = valid, 2 = invalid (or advisories under `strict_example`).
pub fn verdict_exit_code(report: &ValidationReport, strict_example: bool) -> i32 {
    if !report.ok || (strict_example && !report.warnings.is_empty()) {
        2
    } else {
        0
    }
}

struct Run {
    started_at: OffsetDateTime,
    preset: Option<String>,
    source: Option<String>,
}

impl Run {
    fn report(&self, errors: ErrorMap, warnings: Vec<String>) -> ValidationReport {
        let ended_at = OffsetDateTime::now_utc();
        let duration_ms = (ended_at - self.started_at).whole_milliseconds().max(0) as u64;
        ValidationReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta::current(),
            run: RunMeta {
                started_at: self.started_at,
                ended_at: Some(ended_at),
                duration_ms: Some(duration_ms),
            },
            ok: errors.is_empty(),
            preset: self.preset.clone(),
            source: self.source.clone(),
            errors,
            warnings,
        }
    }

    fn fail(&self, key: &str, message: String, strict_example: bool) -> ValidateOutput {
        let mut errors = ErrorMap::new();
        errors.insert(key.to_string(), vec![message]);
        let report = self.report(errors, Vec::new());
        ValidateOutput {
            exit_code: verdict_exit_code(&report, strict_example),
            report,
            resolved_config: None,
        }
    }
}
