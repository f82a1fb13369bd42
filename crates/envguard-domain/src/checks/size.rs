use super::KeyContext;
use super::types::parse_integer;
use crate::model::Directive;

/// Numeric when the key is declared `integer` and the value is one; character count otherwise.
pub fn min(ctx: &KeyContext<'_>, bound: i64) -> Option<String> {
    let numeric = ctx
        .rules
        .has(&Directive::Integer)
        .then(|| parse_integer(ctx.value))
        .flatten();

    match numeric {
        Some(n) if n >= bound => None,
        Some(_) => Some(format!(
            "The {} field must be at least {bound}.",
            ctx.key()
        )),
        None => {
            let len = ctx
                .value
                .string_form()
                .map(|s| s.chars().count())
                .unwrap_or(0);
            if i64::try_from(len).is_ok_and(|len| len >= bound) {
                None
            } else {
                Some(format!(
                    "The {} field must be at least {bound} characters.",
                    ctx.key()
                ))
            }
        }
    }
}
