//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Bootstrap errors ──────────────────────────────────────────────────────────

/// Errors raised while provisioning the environment or running Buildout.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("{program} exited with status {code}")]
    CommandFailed { program: String, code: i32 },

    #[error("{program} was terminated by a signal")]
    CommandKilled { program: String },

    #[error("{program} timed out after {secs}s")]
    CommandTimedOut { program: String, secs: u64 },

    #[error("Python interpreter not found at {0} after creating the virtual environment.")]
    InterpreterMissing(String),

    #[error("virtualenv archive is empty: nothing was extracted into {0}")]
    EmptyArchive(String),

    #[error("virtualenv distribution at {0} does not contain virtualenv.py")]
    MissingVirtualenvScript(String),

    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(String),
}

impl BootstrapError {
    /// Exit code to hand back to the shell for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid URL for {key}: {value}\n\nURLs must start with http:// or https://")]
    InvalidUrl { key: String, value: String },

    #[error("Invalid value for {key}: must not be empty")]
    Empty { key: String },
}
