use envguard_domain::model::{Directive, RuleSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `envguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EnvguardConfigV1 {
    /// Optional schema string for tooling (`envguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to validate against: `standard`, `strict`, `custom`, or a key of `presets`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Validate values from this file instead of the runtime environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,

    /// Warn about rule keys missing from the example file (default: true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_env_example: Option<bool>,

    /// Reference file for the coverage check (default: `.env.example`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_file: Option<String>,

    /// Additional presets; a name matching a built-in replaces it wholesale.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub presets: BTreeMap<String, BTreeMap<String, RuleSpec>>,

    /// Overrides applied on top of the selected preset (the whole rule set when preset = custom).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleSpec>,
}

/// Directives for one key: `["required", "in:a,b"]` or `"required|in:a,b"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RuleSpec {
    List(Vec<String>),
    Piped(String),
}

impl RuleSpec {
    pub fn directives(&self) -> Vec<Directive> {
        match self {
            RuleSpec::List(items) => items.iter().map(|d| Directive::parse(d)).collect(),
            RuleSpec::Piped(text) => text
                .split('|')
                .filter(|d| !d.trim().is_empty())
                .map(Directive::parse)
                .collect(),
        }
    }
}

pub(crate) fn rule_table_to_set(table: &BTreeMap<String, RuleSpec>) -> RuleSet {
    let mut set = RuleSet::new();
    for (key, spec) in table {
        set.insert(key.clone(), spec.directives());
    }
    set
}
