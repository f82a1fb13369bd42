/// One `KEY=value` line, borrowed from the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment<'a> {
    /// 1-based line number.
    pub line: u32,
    pub key: &'a str,
    /// Trimmed text after the first `=`, before normalization.
    pub raw_value: &'a str,
}

/// Split on `\r\n`, `\n`, or a lone `\r`.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                out.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                out.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    out.push(&text[start..]);
    out
}

/// Every assignment in file order, duplicates included.
pub fn assignments(text: &str) -> Vec<Assignment<'_>> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let (key, raw_value) = split_assignment(line)?;
            Some(Assignment {
                line: u32::try_from(idx + 1).unwrap_or(u32::MAX),
                key,
                raw_value,
            })
        })
        .collect()
}

/// Declared keys of a reference file: first appearance order, no duplicates.
pub fn declared_keys(text: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for a in assignments(text) {
        if !keys.iter().any(|k| k == a.key) {
            keys.push(a.key.to_string());
        }
    }
    keys
}

fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let line = strip_export(line);
    let (key, raw_value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, raw_value.trim()))
}

/// `export` followed by at least one whitespace character.
fn strip_export(line: &str) -> &str {
    match line.strip_prefix("export") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_handles_mixed_newlines() {
        assert_eq!(split_lines("a\r\nb\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn assignments_carry_line_numbers() {
        let text = "# header\nA=1\n\nexport B = two\n";
        let found = assignments(text);
        assert_eq!(
            found,
            vec![
                Assignment {
                    line: 2,
                    key: "A",
                    raw_value: "1"
                },
                Assignment {
                    line: 4,
                    key: "B",
                    raw_value: "two"
                },
            ]
        );
    }

    #[test]
    fn declared_keys_dedupe_in_first_appearance_order() {
        let text = "B=1\nA=2\nB=3\n# C=4\nD\n";
        assert_eq!(declared_keys(text), vec!["B", "A"]);
    }

    #[test]
    fn export_needs_whitespace() {
        assert_eq!(strip_export("export\tFOO=1"), "FOO=1");
        assert_eq!(strip_export("exported=1"), "exported=1");
    }
}
