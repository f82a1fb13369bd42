use super::KeyContext;

pub fn unknown(ctx: &KeyContext<'_>, name: &str) -> String {
    format!("Unknown validation rule \"{name}\" for {}.", ctx.key())
}

pub fn malformed(ctx: &KeyContext<'_>, name: &str, detail: &str) -> String {
    format!(
        "Invalid argument for rule \"{name}\" on {}: {detail}.",
        ctx.key()
    )
}
