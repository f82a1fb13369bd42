use super::KeyContext;
use crate::model::ResolvedValue;

const TRUTHY: &[&str] = &["true", "1", "yes", "on"];
const FALSY: &[&str] = &["false", "0", "no", "off"];

pub fn string(ctx: &KeyContext<'_>) -> Option<String> {
    match ctx.value.as_text() {
        Some(_) => None,
        None => Some(format!("The {} field must be a string.", ctx.key())),
    }
}

pub fn boolean(ctx: &KeyContext<'_>) -> Option<String> {
    if is_boolean_like(ctx.value) {
        None
    } else {
        Some(format!("The {} field must be true or false.", ctx.key()))
    }
}

pub fn integer(ctx: &KeyContext<'_>) -> Option<String> {
    match parse_integer(ctx.value) {
        Some(_) => None,
        None => Some(format!("The {} field must be an integer.", ctx.key())),
    }
}

pub fn is_boolean_like(value: &ResolvedValue) -> bool {
    match value {
        ResolvedValue::Bool(_) => true,
        ResolvedValue::Text(s) => {
            let token = s.trim().to_ascii_lowercase();
            TRUTHY.contains(&token.as_str()) || FALSY.contains(&token.as_str())
        }
        ResolvedValue::Absent | ResolvedValue::Empty => false,
    }
}

/// Base-10 integer with optional sign; surrounding whitespace is ignored.
pub fn parse_integer(value: &ResolvedValue) -> Option<i64> {
    value.as_text()?.trim().parse::<i64>().ok()
}
