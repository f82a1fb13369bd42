//! Diagnostics go to stderr through `tracing`; stdout is reserved for results.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "ENVGUARD_LOG";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Verbosity::Verbose,
            (false, true) => Verbosity::Quiet,
            (false, false) => Verbosity::Normal,
        }
    }
}

/// `-v` / `-q` win; otherwise `ENVGUARD_LOG`, falling back to `warn`.
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    match verbosity {
        Verbosity::Verbose => EnvFilter::new("debug"),
        Verbosity::Quiet => EnvFilter::new("error"),
        Verbosity::Normal => {
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    }
}

pub fn init(verbosity: Verbosity) {
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .finish();
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
