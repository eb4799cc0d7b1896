//! Filesystem layout of a bootstrapped Buildout directory.
//!
//! Pure path arithmetic only — no I/O.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

/// Name of the downloaded Buildout bootstrap script.
pub const BOOTSTRAP_SCRIPT: &str = "bootstrap.py";
/// Name of the Buildout configuration file.
pub const BUILDOUT_CFG: &str = "buildout.cfg";
/// Script that must be present at the root of an extracted virtualenv distribution.
pub const VIRTUALENV_SCRIPT: &str = "virtualenv.py";

#[cfg(windows)]
const VENV_BIN: &str = "Scripts";
#[cfg(not(windows))]
const VENV_BIN: &str = "bin";

/// Every path the bootstrap reads or writes, rooted at the destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The destination directory itself.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `parts/venv-dist` — where a fetched virtualenv archive is unpacked.
    #[must_use]
    pub fn venv_dist_dir(&self) -> PathBuf {
        self.root.join("parts").join("venv-dist")
    }

    /// `parts/venv` — the isolated runtime.
    #[must_use]
    pub fn venv_dir(&self) -> PathBuf {
        self.root.join("parts").join("venv")
    }

    /// Interpreter inside the isolated runtime.
    #[must_use]
    pub fn venv_python(&self) -> PathBuf {
        self.venv_dir()
            .join(VENV_BIN)
            .join(format!("python{EXE_SUFFIX}"))
    }

    #[must_use]
    pub fn bootstrap_script(&self) -> PathBuf {
        self.root.join(BOOTSTRAP_SCRIPT)
    }

    #[must_use]
    pub fn buildout_cfg(&self) -> PathBuf {
        self.root.join(BUILDOUT_CFG)
    }

    /// `bin/buildout`, produced by running the bootstrap script.
    #[must_use]
    pub fn buildout_bin(&self) -> PathBuf {
        self.root.join("bin").join(format!("buildout{EXE_SUFFIX}"))
    }
}
