use envguard_domain::model::ResolvedValue;

/// Turn a trimmed raw value into a typed value.
///
/// Quoted values are unwrapped (double quotes also unescape) and are never
/// treated as sentinels. Unquoted values lose any ` # comment` tail and are
/// then matched case-insensitively against `true`, `false`, `null`, `empty`
/// and their parenthesized forms.
pub fn normalize_value(raw: &str) -> ResolvedValue {
    if raw.is_empty() {
        return ResolvedValue::Empty;
    }

    if let Some((quote, inner)) = unquote(raw) {
        return match quote {
            '"' => ResolvedValue::text(unescape_c(inner)),
            _ => ResolvedValue::text(inner),
        };
    }

    let value = strip_inline_comment(raw).trim();
    match value.to_ascii_lowercase().as_str() {
        "true" | "(true)" => ResolvedValue::Bool(true),
        "false" | "(false)" => ResolvedValue::Bool(false),
        "null" | "(null)" => ResolvedValue::Absent,
        "empty" | "(empty)" => ResolvedValue::Empty,
        _ => ResolvedValue::text(value),
    }
}

fn unquote(raw: &str) -> Option<(char, &str)> {
    let first = raw.chars().next()?;
    if raw.len() < 2 || !matches!(first, '"' | '\'') || !raw.ends_with(first) {
        return None;
    }
    Some((first, &raw[1..raw.len() - 1]))
}

/// Cut at the first run of ASCII whitespace that is followed by `#`.
fn strip_inline_comment(value: &str) -> &str {
    let mut run_start: Option<usize> = None;
    for (idx, ch) in value.char_indices() {
        if ch.is_ascii_whitespace() {
            run_start.get_or_insert(idx);
        } else if ch == '#' {
            if let Some(start) = run_start {
                return &value[..start];
            }
        } else {
            run_start = None;
        }
    }
    value
}

/// C-style backslash unescaping.
///
/// Handles `\a \b \f \n \r \t \v`, octal `\NNN` and hex `\xHH`. Any other escaped
/// character is kept without its backslash; a trailing lone backslash is kept.
pub fn unescape_c(input: &str) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }

        i += 1;
        let Some(&next) = bytes.get(i) else {
            out.push(b'\\');
            break;
        };
        match next {
            b'a' => out.push(0x07),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'v' => out.push(0x0B),
            b'x' if bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit) => {
                let digits = take_while(&bytes[i + 1..], 2, u8::is_ascii_hexdigit);
                out.push(parse_radix(digits, 16));
                i += digits.len();
            }
            b'0'..=b'7' => {
                let digits = take_while(&bytes[i..], 3, |d| (b'0'..=b'7').contains(d));
                out.push(parse_radix(digits, 8));
                i += digits.len() - 1;
            }
            other => out.push(other),
        }
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn take_while(bytes: &[u8], max: usize, pred: impl Fn(&u8) -> bool) -> &[u8] {
    let len = bytes.iter().take(max).take_while(|b| pred(b)).count();
    &bytes[..len]
}

/// Digits are pre-validated; overflowing octal (`\777`) wraps like C.
fn parse_radix(digits: &[u8], radix: u32) -> u8 {
    let value = digits
        .iter()
        .filter_map(|d| char::from(*d).to_digit(radix))
        .fold(0u32, |acc, d| acc * radix + d);
    (value & 0xFF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_plain_values() {
        assert_eq!(normalize_value(""), ResolvedValue::Empty);
        assert_eq!(normalize_value("Demo"), ResolvedValue::text("Demo"));
        assert_eq!(normalize_value("MiXeD"), ResolvedValue::text("MiXeD"));
    }

    #[test]
    fn sentinels_are_case_insensitive() {
        assert_eq!(normalize_value("TRUE"), ResolvedValue::Bool(true));
        assert_eq!(normalize_value("(False)"), ResolvedValue::Bool(false));
        assert_eq!(normalize_value("Null"), ResolvedValue::Absent);
        assert_eq!(normalize_value("EMPTY"), ResolvedValue::Empty);
        assert_eq!(normalize_value("true # enabled"), ResolvedValue::Bool(true));
    }

    #[test]
    fn double_quotes_unescape_single_quotes_do_not() {
        assert_eq!(
            normalize_value(r#""line\nbreak""#),
            ResolvedValue::text("line\nbreak")
        );
        assert_eq!(
            normalize_value(r"'line\nbreak'"),
            ResolvedValue::text(r"line\nbreak")
        );
        assert_eq!(normalize_value(r#""""#), ResolvedValue::Empty);
    }

    #[test]
    fn mismatched_or_lone_quotes_are_not_pairs() {
        assert_eq!(normalize_value("\""), ResolvedValue::text("\""));
        assert_eq!(normalize_value("'abc\""), ResolvedValue::text("'abc\""));
    }

    #[test]
    fn inline_comment_needs_leading_whitespace() {
        assert_eq!(strip_inline_comment("value # note"), "value ");
        assert_eq!(strip_inline_comment("value\t\t#note # more"), "value");
        assert_eq!(strip_inline_comment("a#b #c"), "a#b");
        assert_eq!(strip_inline_comment("#start"), "#start");
    }

    #[test]
    fn unicode_spaces_do_not_start_a_comment() {
        assert_eq!(
            normalize_value("price\u{a0}#1"),
            ResolvedValue::text("price\u{a0}#1")
        );
        assert_eq!(strip_inline_comment("a\u{2003}#b #c"), "a\u{2003}#b");
    }

    #[test]
    fn unescape_handles_c_sequences() {
        assert_eq!(unescape_c(r"a\tb"), "a\tb");
        assert_eq!(unescape_c(r#"say \"hi\""#), "say \"hi\"");
        assert_eq!(unescape_c(r"back\\slash"), "back\\slash");
        assert_eq!(unescape_c(r"\101\x42"), "AB");
        assert_eq!(unescape_c(r"\q"), "q");
        assert_eq!(unescape_c(r"\xZZ"), "xZZ");
        assert_eq!(unescape_c("trailing\\"), "trailing\\");
    }

    #[test]
    fn trailing_backslash_in_double_quotes_survives() {
        assert_eq!(
            normalize_value(r#""C:\dir\""#),
            ResolvedValue::text("C:dir\\")
        );
    }
}
