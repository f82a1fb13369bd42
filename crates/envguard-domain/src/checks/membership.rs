use super::KeyContext;

/// Exact match of the value's string form against the listed alternatives.
pub fn one_of(ctx: &KeyContext<'_>, allowed: &[String]) -> Option<String> {
    let matched = ctx
        .value
        .string_form()
        .is_some_and(|v| allowed.iter().any(|a| a.as_str() == v.as_ref()));

    if matched {
        None
    } else {
        Some(format!("The selected {} is invalid.", ctx.key()))
    }
}
