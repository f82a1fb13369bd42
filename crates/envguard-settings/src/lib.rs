//! Config parsing and preset/rule resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{EnvguardConfigV1, RuleSpec};
pub use presets::{BUILTIN_PRESETS, builtin_preset};
pub use resolve::{Overrides, ResolveError, ResolvedConfig, available_presets};

/// Parse `envguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<EnvguardConfigV1> {
    let cfg: EnvguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective rule set and source selection (preset + overrides + CLI overrides).
pub fn resolve_config(
    cfg: &EnvguardConfigV1,
    overrides: &Overrides,
) -> Result<ResolvedConfig, ResolveError> {
    resolve::resolve_config(cfg, overrides)
}
