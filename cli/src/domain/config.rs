//! Domain types and validators for bootstrap configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Source archive of the pinned virtualenv release.
pub const DEFAULT_VIRTUALENV_URL: &str =
    "https://pypi.python.org/packages/source/v/virtualenv/virtualenv-1.11.6.tar.gz";

/// Buildout's bootstrap script. This URL is supposed to be stable.
pub const DEFAULT_BOOTSTRAP_URL: &str = "https://bootstrap.pypa.io/bootstrap-buildout.py";

/// Host interpreter used to run virtualenv.
pub const DEFAULT_PYTHON: &str = "python";

// ── Config schema ────────────────────────────────────────────────────────────

/// Configuration stored in `~/.bootstrap-venv/config.yaml`.
///
/// Every field is optional in the file; missing fields take the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Where to download the virtualenv source archive from.
    pub virtualenv_url: String,
    /// Where to download Buildout's `bootstrap.py` from.
    pub bootstrap_url: String,
    /// Host interpreter that runs virtualenv.
    pub python: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            virtualenv_url: DEFAULT_VIRTUALENV_URL.to_string(),
            bootstrap_url: DEFAULT_BOOTSTRAP_URL.to_string(),
            python: DEFAULT_PYTHON.to_string(),
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a download URL.
///
/// # Errors
///
/// Returns an error if the URL is not `http://` or `https://`.
pub fn validate_url(key: &str, value: &str) -> Result<()> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    if rest.is_none_or(str::is_empty) {
        return Err(ConfigError::InvalidUrl {
            key: key.to_string(),
            value: value.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Validates a whole configuration.
///
/// # Errors
///
/// Returns the first invalid field.
pub fn validate_config(config: &BootstrapConfig) -> Result<()> {
    validate_url("virtualenv_url", &config.virtualenv_url)?;
    validate_url("bootstrap_url", &config.bootstrap_url)?;
    if config.python.trim().is_empty() {
        return Err(ConfigError::Empty {
            key: "python".to_string(),
        }
        .into());
    }
    Ok(())
}
