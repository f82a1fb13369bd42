//! Stable identifiers for pseudo-keys, presets, and defaults.
//!
//! Pseudo-keys start with `_` so they never collide with a real variable name in
//! rendered output.

// Pseudo-keys for non-variable failures
pub const KEY_PRESET: &str = "_preset";
pub const KEY_RULES: &str = "_rules";
pub const KEY_CONFIG: &str = "_config";
pub const KEY_ENV_FILE: &str = "_env_file";

// Presets
pub const PRESET_STANDARD: &str = "standard";
pub const PRESET_STRICT: &str = "strict";
pub const PRESET_CUSTOM: &str = "custom";

// Sources
pub const SOURCE_RUNTIME: &str = "runtime";

// Files
pub const DEFAULT_CONFIG_FILE: &str = "envguard.toml";
pub const DEFAULT_EXAMPLE_FILE: &str = ".env.example";
