//! Property-based tests for the engine.
//!
//! These verify invariants around:
//! - `nullable` silencing the constraints after it for absent values
//! - `required` on absent keys
//! - determinism and `ok`/`errors` consistency
//! - rule keys bounding what is reported

use crate::engine::evaluate;
use crate::model::{ResolvedValue, RuleSet};
use crate::source::MapSource;
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Z0-9_]{0,15}").unwrap()
}

fn arb_directive() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("required".to_string()),
        Just("string".to_string()),
        Just("boolean".to_string()),
        Just("integer".to_string()),
        Just("url".to_string()),
        Just("email".to_string()),
        Just("in:local,production".to_string()),
        (0i64..10).prop_map(|n| format!("min:{n}")),
    ]
}

fn arb_value() -> impl Strategy<Value = ResolvedValue> {
    prop_oneof![
        Just(ResolvedValue::Absent),
        Just(ResolvedValue::Empty),
        any::<bool>().prop_map(ResolvedValue::Bool),
        "[ -~]{1,24}".prop_map(ResolvedValue::text),
    ]
}

fn arb_rules() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(
        (arb_key(), prop::collection::vec(arb_directive(), 0..5)),
        0..8,
    )
}

proptest! {
    #[test]
    fn leading_nullable_silences_absent_values(directives in prop::collection::vec(arb_directive(), 0..6)) {
        let mut all = vec!["nullable".to_string()];
        all.extend(directives);
        let rules = RuleSet::from_strings([("KEY", all)]);

        let outcome = evaluate(&rules, &MapSource::new("empty"));

        prop_assert!(outcome.ok);
    }

    #[test]
    fn nullable_absent_keeps_only_earlier_messages(
        before in prop::collection::vec(arb_directive(), 0..4),
        after in prop::collection::vec(arb_directive(), 0..4),
    ) {
        let mut all = before.clone();
        all.push("nullable".to_string());
        all.extend(after);
        let with_nullable = RuleSet::from_strings([("KEY", all)]);
        let prefix_only = RuleSet::from_strings([("KEY", before)]);
        let source = MapSource::new("empty");

        prop_assert_eq!(
            evaluate(&with_nullable, &source),
            evaluate(&prefix_only, &source)
        );
    }

    #[test]
    fn required_absent_always_reports(directives in prop::collection::vec(arb_directive(), 0..6)) {
        let mut all = vec!["required".to_string()];
        all.extend(directives);
        let rules = RuleSet::from_strings([("KEY", all)]);

        let outcome = evaluate(&rules, &MapSource::new("empty"));

        prop_assert!(!outcome.ok);
        prop_assert!(outcome
            .messages_for("KEY")
            .iter()
            .any(|m| m == "The KEY field is required."));
    }

    #[test]
    fn evaluation_is_deterministic_and_bounded_by_rule_keys(
        rules in arb_rules(),
        values in prop::collection::vec((arb_key(), arb_value()), 0..8),
    ) {
        let rule_set = RuleSet::from_strings(rules);
        let source = values
            .into_iter()
            .fold(MapSource::new("generated"), |s, (k, v)| s.with(k, v));

        let first = evaluate(&rule_set, &source);
        let second = evaluate(&rule_set, &source);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.ok, first.errors.is_empty());
        for (key, messages) in &first.errors {
            prop_assert!(rule_set.get(key).is_some());
            prop_assert!(!messages.is_empty());
        }
    }
}
