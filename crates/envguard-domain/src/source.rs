//! Value sources consumed by the engine.

use crate::model::ResolvedValue;
use std::collections::BTreeMap;

/// Where rule values come from: the live environment or a parsed file.
///
/// Lookups are per key and independent; a key the source does not know is
/// [`ResolvedValue::Absent`], never an error.
pub trait EnvSource {
    fn resolve(&self, key: &str) -> ResolvedValue;

    /// Keys the source declares, in first-appearance order.
    fn declared_keys(&self) -> Vec<String>;

    /// Short label for reports (`runtime` or a file path).
    fn describe(&self) -> String;
}

/// In-memory source, used by tests and by callers that already hold values.
#[derive(Clone, Debug, Default)]
pub struct MapSource {
    label: String,
    values: BTreeMap<String, ResolvedValue>,
}

impl MapSource {
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with<K: Into<String>>(mut self, key: K, value: ResolvedValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn with_text<K: Into<String>, V: Into<String>>(self, key: K, value: V) -> Self {
        self.with(key, ResolvedValue::text(value))
    }
}

impl EnvSource for MapSource {
    fn resolve(&self, key: &str) -> ResolvedValue {
        self.values.get(key).cloned().unwrap_or_default()
    }

    fn declared_keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
