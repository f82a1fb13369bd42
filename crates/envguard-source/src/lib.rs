//! Source adapters: the live process environment and dotenv files on disk.
//!
//! This crate is allowed to do filesystem IO and read process environment variables.
//! Parsing lives in `envguard-dotenv`; evaluation lives in `envguard-domain`.

#![forbid(unsafe_code)]

mod file;
mod reference;
mod runtime;

use camino::{Utf8Path, Utf8PathBuf};

pub use file::{FileEnv, SourceError};
pub use reference::{compare_with_env_example, read_reference_keys};
pub use runtime::RuntimeEnv;

/// Absolute paths are used as-is; anything else is joined to `project_root`.
pub fn resolve_path(project_root: &Utf8Path, path: &str) -> Utf8PathBuf {
    let candidate = Utf8Path::new(path);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        project_root.join(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_the_project_root() {
        let root = Utf8Path::new("/srv/app");
        assert_eq!(
            resolve_path(root, ".env.testing"),
            Utf8PathBuf::from("/srv/app/.env.testing")
        );
        assert_eq!(
            resolve_path(root, "config/.env"),
            Utf8PathBuf::from("/srv/app/config/.env")
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_paths_are_kept() {
        let root = Utf8Path::new("/srv/app");
        assert_eq!(
            resolve_path(root, "/etc/app.env"),
            Utf8PathBuf::from("/etc/app.env")
        );
    }
}
