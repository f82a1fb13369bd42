use envguard_types::ErrorMap;

/// Result of evaluating a rule set against one source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub ok: bool,
    pub errors: ErrorMap,
}

impl ValidationOutcome {
    /// Keys with no messages are dropped; `ok` follows from what is left.
    pub fn from_errors(mut errors: ErrorMap) -> Self {
        errors.retain(|_, messages| !messages.is_empty());
        Self {
            ok: errors.is_empty(),
            errors,
        }
    }

    pub fn messages_for(&self, key: &str) -> &[String] {
        self.errors.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn message_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}
