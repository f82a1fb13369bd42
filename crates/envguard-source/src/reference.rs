use crate::file::{SourceError, read_text};
use camino::Utf8Path;
use envguard_domain::coverage;

/// Keys declared in a reference file, first-appearance order, no duplicates.
pub fn read_reference_keys(path: &Utf8Path) -> Result<Vec<String>, SourceError> {
    let text = read_text(path)?;
    Ok(envguard_dotenv::declared_keys(&text))
}

/// Advisories for rule keys the reference file does not declare.
///
/// A missing or unreadable reference yields a single skip advisory instead of an error.
pub fn compare_with_env_example<'a, I>(
    rule_keys: I,
    path: &Utf8Path,
    display_name: &str,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    match read_reference_keys(path) {
        Ok(declared) => coverage::missing_from_reference(rule_keys, &declared, display_name),
        Err(SourceError::NotFound { .. }) => {
            tracing::debug!(path = %path, "reference file not found");
            vec![coverage::reference_not_found(display_name)]
        }
        Err(err @ SourceError::Unreadable { .. }) => {
            tracing::warn!(path = %path, error = %err, "reference file unreadable");
            vec![coverage::reference_unreadable(display_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, text: &str) -> Utf8PathBuf {
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp dir");
        let path = root.join(name);
        std::fs::write(&path, text).expect("write");
        path
    }

    #[test]
    fn reference_keys_ignore_values_and_comments() {
        let tmp = TempDir::new().expect("temp dir");
        let path = write(
            &tmp,
            ".env.example",
            "# header\nAPP_NAME=\nexport APP_ENV=local\nAPP_NAME=again\nnot an assignment\n",
        );
        assert_eq!(
            read_reference_keys(&path).expect("read"),
            vec!["APP_NAME", "APP_ENV"]
        );
    }

    #[test]
    fn missing_rule_keys_become_advisories() {
        let tmp = TempDir::new().expect("temp dir");
        let path = write(&tmp, ".env.example", "APP_NAME=\n");

        let warnings = compare_with_env_example(["APP_NAME", "FOO"], &path, ".env.example");
        assert_eq!(
            warnings,
            vec!["FOO is in rules but missing from .env.example"]
        );
    }

    #[test]
    fn absent_reference_yields_skip_advisory() {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 temp dir");

        let warnings =
            compare_with_env_example(["APP_NAME"], &root.join(".env.example"), ".env.example");
        assert_eq!(
            warnings,
            vec![".env.example not found; skipping example comparison"]
        );
    }
}
