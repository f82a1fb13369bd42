use crate::model::{Directive, KeyRules, ResolvedValue};

mod config;
mod format;
mod membership;
mod presence;
mod size;
mod types;


/// What a single check sees: the key, its resolved value, and its sibling directives.
pub struct KeyContext<'a> {
    pub rules: &'a KeyRules,
    pub value: &'a ResolvedValue,
}

impl KeyContext<'_> {
    pub fn key(&self) -> &str {
        &self.rules.key
    }
}

/// Evaluate one directive. `None` means satisfied.
pub fn run(directive: &Directive, ctx: &KeyContext<'_>) -> Option<String> {
    match directive {
        Directive::Required => presence::required(ctx),
        // Handled by the engine before any directive runs.
        Directive::Nullable => None,
        Directive::String => types::string(ctx),
        Directive::Boolean => types::boolean(ctx),
        Directive::Integer => types::integer(ctx),
        Directive::Url => format::url(ctx),
        Directive::Email => format::email(ctx),
        Directive::In(allowed) => membership::one_of(ctx, allowed),
        Directive::Min(bound) => size::min(ctx, *bound),
        Directive::Unknown { name } => Some(config::unknown(ctx, name)),
        Directive::Malformed { name, detail } => Some(config::malformed(ctx, name, detail)),
    }
}
