//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::BootstrapConfig;

/// Names the config file, overriding `~/.bootstrap-venv/config.yaml`.
pub const CONFIG_PATH_ENV: &str = "BOOTSTRAP_VENV_CONFIG";
/// Overrides `virtualenv_url`.
pub const VIRTUALENV_URL_ENV: &str = "BOOTSTRAP_VENV_VIRTUALENV_URL";
/// Overrides `bootstrap_url`.
pub const BOOTSTRAP_URL_ENV: &str = "BOOTSTRAP_VENV_BOOTSTRAP_URL";
/// Overrides `python`.
pub const PYTHON_ENV: &str = "BOOTSTRAP_VENV_PYTHON";

/// Production implementation of `ConfigStore` backed by an optional YAML file
/// and environment variable overrides.
pub struct YamlConfigStore;

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<BootstrapConfig> {
        let path = self.path()?;
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("cannot parse {}", path.display()))?
        } else {
            BootstrapConfig::default()
        };
        apply_env_overrides(&mut config);
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".bootstrap-venv").join("config.yaml"))
    }
}

fn apply_env_overrides(config: &mut BootstrapConfig) {
    for (var, field) in [
        (VIRTUALENV_URL_ENV, &mut config.virtualenv_url),
        (BOOTSTRAP_URL_ENV, &mut config.bootstrap_url),
        (PYTHON_ENV, &mut config.python),
    ] {
        if let Ok(val) = std::env::var(var)
            && !val.is_empty()
        {
            *field = val;
        }
    }
}
