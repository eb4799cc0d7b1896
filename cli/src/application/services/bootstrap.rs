//! Application service — the whole provisioning sequence.
//!
//! `Start → DirectoryResolved → EnvironmentProvisioned → BootstrapFetched →
//! ConfigEnsured → BootstrapInvoked → BuildInvoked → Done`. The first failing
//! step aborts the run; nothing is retried or rolled back.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::{
    ArchiveExtractor, CommandRunner, HttpFetcher, LocalFs, ProgressReporter,
};
use crate::application::services::buildout::{
    ConfigOutcome, bootstrap_buildout, download_bootstrap, ensure_buildout_cfg,
};
use crate::application::services::environment::{create_environment, resolve_virtualenv};
use crate::domain::{BootstrapConfig, Layout, VirtualenvTool, validate_config};

/// The infrastructure a bootstrap run needs.
pub struct BootstrapPorts<'a, R, H, X, F> {
    /// Spawns virtualenv, the bootstrap script and `bin/buildout`.
    pub runner: &'a R,
    /// Downloads the virtualenv archive and `bootstrap.py`.
    pub fetcher: &'a H,
    /// Unpacks the virtualenv archive.
    pub extractor: &'a X,
    /// Local filesystem.
    pub fs: &'a F,
}

/// Summary of a successful run.
#[derive(Debug)]
pub struct BootstrapReport {
    /// Canonical destination directory.
    pub destination: PathBuf,
    /// Runtime directory (`parts/venv`).
    pub venv_dir: PathBuf,
    /// How virtualenv was obtained.
    pub virtualenv: VirtualenvTool,
    /// Whether `buildout.cfg` was generated.
    pub buildout_cfg: ConfigOutcome,
}

/// Provision `destination` and run Buildout in it.
///
/// # Errors
///
/// Returns the first error encountered; child process failures carry the
/// child's exit code (see `BootstrapError::CommandFailed`).
pub async fn bootstrap<R, H, X, F>(
    ports: &BootstrapPorts<'_, R, H, X, F>,
    config: &BootstrapConfig,
    destination: &Path,
    reporter: &impl ProgressReporter,
) -> Result<BootstrapReport>
where
    R: CommandRunner,
    H: HttpFetcher,
    X: ArchiveExtractor,
    F: LocalFs,
{
    validate_config(config)?;

    reporter.step(&format!(
        "About to create Buildout environment in {}...",
        destination.display()
    ));
    ports.fs.create_dir_all(destination)?;
    let layout = Layout::new(ports.fs.canonicalize(destination)?);

    let virtualenv = resolve_virtualenv(
        ports.runner,
        ports.fetcher,
        ports.extractor,
        ports.fs,
        reporter,
        &layout,
        &config.virtualenv_url,
        &config.python,
    )
    .await?;
    let venv_dir = create_environment(ports.runner, ports.fs, reporter, &virtualenv, &layout).await?;

    download_bootstrap(
        ports.fetcher,
        ports.fs,
        reporter,
        &layout,
        &config.bootstrap_url,
    )?;
    let buildout_cfg = ensure_buildout_cfg(ports.fs, reporter, &layout)?;

    bootstrap_buildout(ports.runner, reporter, &layout).await?;

    Ok(BootstrapReport {
        destination: layout.root().to_path_buf(),
        venv_dir,
        virtualenv,
        buildout_cfg,
    })
}
