//! Advisory comparison of rule keys against a reference key list (e.g. `.env.example`).
//!
//! Nothing here affects the validation outcome.

use std::collections::BTreeSet;

/// One advisory per rule key absent from `reference_keys`, in rule order.
pub fn missing_from_reference<'a, I>(
    rule_keys: I,
    reference_keys: &[String],
    reference_name: &str,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let declared: BTreeSet<&str> = reference_keys.iter().map(String::as_str).collect();
    let mut seen = BTreeSet::new();

    rule_keys
        .into_iter()
        .filter(|key| !declared.contains(key) && seen.insert(*key))
        .map(|key| format!("{key} is in rules but missing from {reference_name}"))
        .collect()
}

pub fn reference_not_found(reference_name: &str) -> String {
    format!("{reference_name} not found; skipping example comparison")
}

pub fn reference_unreadable(reference_name: &str) -> String {
    format!("Failed to read {reference_name}; skipping example comparison")
}
