//! Dotenv parsing: `KEY=value` lines into typed values.
//!
//! This crate is IO-free; callers hand it file contents. It never panics on any input.

#![forbid(unsafe_code)]

mod lines;
mod value;

pub use lines::{Assignment, assignments, declared_keys, split_lines};
pub use value::{normalize_value, unescape_c};

use envguard_domain::model::ResolvedValue;
use std::collections::BTreeMap;

/// Parse dotenv text into key -> value. Later assignments to the same key win.
pub fn parse_dotenv(text: &str) -> BTreeMap<String, ResolvedValue> {
    assignments(text)
        .into_iter()
        .map(|a| (a.key.to_string(), normalize_value(a.raw_value)))
        .collect()
}
