//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::BootstrapConfig;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should apply the instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program in `cwd` with inherited stdio and return its exit status.
    /// No timeout; the child runs to completion.
    async fn run_status(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ExitStatus>;
}

// ── Network Port ──────────────────────────────────────────────────────────────

/// Abstracts HTTP downloads so services can be tested without network access.
pub trait HttpFetcher {
    /// Download `url` into memory with a plain GET.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

// ── Archive Port ──────────────────────────────────────────────────────────────

/// Abstracts unpacking of a gzip-compressed tarball.
pub trait ArchiveExtractor {
    /// Unpack `archive` (a `.tar.gz` held in memory) into `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive is malformed or cannot be written.
    fn extract_tar_gz(&self, archive: &[u8], dest: &Path) -> Result<()>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the handful of filesystem operations the bootstrap performs.
pub trait LocalFs {
    /// Returns `true` if `path` exists.
    fn exists(&self, path: &Path) -> bool;
    /// Create `path` and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Resolve `path` to an absolute path without symlinks.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
    /// Write `content` to `path`, replacing any existing file.
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
    /// Write `content` to `path` only if nothing exists there yet.
    ///
    /// Returns `true` if the file was created, `false` if a regular file
    /// already existed. Anything else already at `path` is an error.
    fn write_new(&self, path: &Path, content: &[u8]) -> Result<bool>;
    /// First directory entry of `dir` in the order the OS returns them.
    fn first_entry(&self, dir: &Path) -> Result<Option<PathBuf>>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading of the bootstrap configuration.
pub trait ConfigStore {
    /// Load the effective configuration (file, then environment overrides).
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<BootstrapConfig>;
    /// Path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
