use super::KeyContext;
use regex::Regex;
use std::sync::LazyLock;

/// Absolute URL: scheme, optional userinfo, non-empty host, optional port, path/query/fragment.
const URL_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*://(?:[^\s/?#@]+@)?(?:\[[0-9A-Fa-f:.]+\]|[A-Za-z0-9\-._~%!$&'()*+,;=]+)(?::[0-9]{1,5})?(?:[/?#][^\s]*)?$";

/// `local@domain` with dot-atom local part and hostname-style labels.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-]+)*@[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?)*$";

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(URL_PATTERN).expect("valid regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

pub fn url(ctx: &KeyContext<'_>) -> Option<String> {
    if ctx.value.as_text().is_some_and(is_url) {
        None
    } else {
        Some(format!("The {} field must be a valid URL.", ctx.key()))
    }
}

pub fn email(ctx: &KeyContext<'_>) -> Option<String> {
    if ctx.value.as_text().is_some_and(is_email) {
        None
    } else {
        Some(format!(
            "The {} field must be a valid email address.",
            ctx.key()
        ))
    }
}

pub fn is_url(s: &str) -> bool {
    URL_RE.is_match(s)
}

pub fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}
