use crate::checks::{self, KeyContext};
use crate::model::{Directive, KeyRules, ResolvedValue, RuleSet};
use crate::report::ValidationOutcome;
use crate::source::EnvSource;
use envguard_types::ErrorMap;

/// Resolve every rule key from `source` and collect every violated constraint.
///
/// Keys outside the rule set are never resolved.
pub fn evaluate<S: EnvSource + ?Sized>(rules: &RuleSet, source: &S) -> ValidationOutcome {
    let mut errors = ErrorMap::new();

    for key_rules in rules.iter() {
        let value = source.resolve(&key_rules.key);
        let messages = evaluate_key(key_rules, &value);
        if !messages.is_empty() {
            errors.insert(key_rules.key.clone(), messages);
        }
    }

    ValidationOutcome::from_errors(errors)
}

/// Messages for one key, in declaration order. Never stops at the first failure.
///
/// Once `nullable` is reached with an absent value, the constraints after it are
/// skipped; directives before it still run. Configuration errors (unknown or
/// malformed directives) are reported wherever they appear.
pub fn evaluate_key(key_rules: &KeyRules, value: &ResolvedValue) -> Vec<String> {
    let ctx = KeyContext {
        rules: key_rules,
        value,
    };
    let mut skipping = false;
    let mut messages = Vec::new();

    for directive in &key_rules.directives {
        if skipping && !directive.is_config_error() {
            continue;
        }
        if let Some(message) = checks::run(directive, &ctx) {
            messages.push(message);
        }
        if *directive == Directive::Nullable && value.is_absent() {
            skipping = true;
        }
    }

    messages
}
