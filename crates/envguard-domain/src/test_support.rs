use crate::engine::evaluate_key;
use crate::model::{Directive, KeyRules, ResolvedValue};

pub fn key_rules(key: &str, directives: &[&str]) -> KeyRules {
    KeyRules {
        key: key.to_string(),
        directives: directives.iter().map(|d| Directive::parse(d)).collect(),
    }
}

pub fn text(s: &str) -> ResolvedValue {
    ResolvedValue::text(s)
}

/// Messages produced for `KEY` under `directives`.
pub fn messages(directives: &[&str], value: ResolvedValue) -> Vec<String> {
    evaluate_key(&key_rules("KEY", directives), &value)
}

pub fn passes(directives: &[&str], value: ResolvedValue) -> bool {
    messages(directives, value).is_empty()
}
