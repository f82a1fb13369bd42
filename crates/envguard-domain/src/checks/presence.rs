use super::KeyContext;

/// Only absence fails; an empty string is present.
pub fn required(ctx: &KeyContext<'_>) -> Option<String> {
    ctx.value
        .is_absent()
        .then(|| format!("The {} field is required.", ctx.key()))
}
