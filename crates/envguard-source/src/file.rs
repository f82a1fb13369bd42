use camino::{Utf8Path, Utf8PathBuf};
use envguard_domain::model::ResolvedValue;
use envguard_domain::source::EnvSource;
use std::collections::BTreeMap;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Environment file not found: {path}")]
    NotFound { path: Utf8PathBuf },

    #[error("Failed to read environment file: {path}")]
    Unreadable {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Values parsed from a dotenv file, loaded once.
#[derive(Clone, Debug)]
pub struct FileEnv {
    path: Utf8PathBuf,
    values: BTreeMap<String, ResolvedValue>,
    declared: Vec<String>,
}

impl FileEnv {
    pub fn load(path: &Utf8Path) -> Result<Self, SourceError> {
        let text = read_text(path)?;
        let env = Self::from_text(path, &text);
        tracing::debug!(path = %path, keys = env.values.len(), "loaded env file");
        Ok(env)
    }

    pub fn from_text(path: &Utf8Path, text: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            values: envguard_dotenv::parse_dotenv(text),
            declared: envguard_dotenv::declared_keys(text),
        }
    }
}

impl EnvSource for FileEnv {
    fn resolve(&self, key: &str) -> ResolvedValue {
        self.values.get(key).cloned().unwrap_or_default()
    }

    fn declared_keys(&self) -> Vec<String> {
        self.declared.clone()
    }

    fn describe(&self) -> String {
        self.path.to_string()
    }
}

pub(crate) fn read_text(path: &Utf8Path) -> Result<String, SourceError> {
    if !path.is_file() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
