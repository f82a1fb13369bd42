//! The `presets` use case: list selectable preset names.

use anyhow::Context;

/// Built-in presets, then presets configured in `config_text`, then `custom`.
pub fn list_presets(config_text: &str) -> anyhow::Result<Vec<String>> {
    let cfg = if config_text.trim().is_empty() {
        envguard_settings::EnvguardConfigV1::default()
    } else {
        envguard_settings::parse_config_toml(config_text).context("parse config")?
    };
    Ok(envguard_settings::available_presets(&cfg))
}
