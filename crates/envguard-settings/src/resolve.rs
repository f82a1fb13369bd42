use crate::model::{EnvguardConfigV1, rule_table_to_set};
use crate::presets::{BUILTIN_PRESETS, builtin_preset};
use envguard_domain::model::RuleSet;
use envguard_types::ids::{DEFAULT_EXAMPLE_FILE, PRESET_CUSTOM, PRESET_STANDARD};
use thiserror::Error;

/// Values supplied on the command line; they win over `envguard.toml`.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub preset: Option<String>,
    pub env_file: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub preset: String,
    pub rules: RuleSet,
    /// Selected value file as written by the user (not yet joined to the project root).
    pub env_file: Option<String>,
    pub check_env_example: bool,
    pub example_file: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unknown preset \"{name}\". Available presets: {}", available.join(", "))]
    UnknownPreset {
        name: String,
        available: Vec<String>,
    },

    #[error("No rules resolved. Configure a preset or add rules in envguard.toml")]
    NoRules { preset: String },
}

pub fn resolve_config(
    cfg: &EnvguardConfigV1,
    overrides: &Overrides,
) -> Result<ResolvedConfig, ResolveError> {
    let preset = select(overrides.preset.as_deref(), cfg.preset.as_deref())
        .unwrap_or(PRESET_STANDARD)
        .to_string();

    let overrides_set = rule_table_to_set(&cfg.rules);

    let rules = if preset == PRESET_CUSTOM {
        overrides_set
    } else {
        let mut base = preset_rules(cfg, &preset).ok_or_else(|| ResolveError::UnknownPreset {
            name: preset.clone(),
            available: available_presets(cfg),
        })?;
        // `rules` always overrides keys of the selected preset.
        base.merge(overrides_set);
        base
    };

    if rules.is_empty() {
        return Err(ResolveError::NoRules { preset });
    }

    Ok(ResolvedConfig {
        preset,
        rules,
        env_file: select(overrides.env_file.as_deref(), cfg.env_file.as_deref())
            .map(str::to_string),
        check_env_example: cfg.check_env_example.unwrap_or(true),
        example_file: cfg
            .example_file
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_EXAMPLE_FILE)
            .to_string(),
    })
}

/// Built-ins first, then configured presets, then `custom`; no duplicates.
pub fn available_presets(cfg: &EnvguardConfigV1) -> Vec<String> {
    let mut names: Vec<String> = BUILTIN_PRESETS.iter().map(|s| s.to_string()).collect();
    let configured = cfg.presets.keys().map(String::as_str);
    for name in configured.chain([PRESET_CUSTOM]) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

fn preset_rules(cfg: &EnvguardConfigV1, name: &str) -> Option<RuleSet> {
    match cfg.presets.get(name) {
        Some(table) => Some(rule_table_to_set(table)),
        None => builtin_preset(name),
    }
}

/// First non-blank candidate, trimmed.
fn select<'a>(cli: Option<&'a str>, config: Option<&'a str>) -> Option<&'a str> {
    [cli, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}
