//! Application service — fetch Buildout's bootstrap script, materialize a
//! default `buildout.cfg`, and run the bootstrap followed by `bin/buildout`.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, HttpFetcher, LocalFs, ProgressReporter};
use crate::application::services::process::{ensure_success, path_arg};
use crate::domain::digest::{format_size, sha256_hex};
use crate::domain::{Layout, default_buildout_cfg};

/// What happened to `buildout.cfg` during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOutcome {
    /// No config existed; the default was written.
    Created,
    /// An existing config was left untouched.
    Kept,
}

/// Download the bootstrap script verbatim into `bootstrap.py`.
///
/// # Errors
///
/// Returns an error if the download or the write fails.
pub fn download_bootstrap(
    fetcher: &impl HttpFetcher,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    layout: &Layout,
    url: &str,
) -> Result<PathBuf> {
    let path = layout.bootstrap_script();
    reporter.step(&format!("Downloading Buildout bootstrap from {url}..."));
    let script = fetcher.fetch(url).context("downloading Buildout bootstrap")?;
    fs.write(&path, &script)?;
    reporter.success(&format!(
        "Downloaded Buildout bootstrap into {} ({}, sha256 {}).",
        path.display(),
        format_size(script.len()),
        sha256_hex(&script)
    ));
    Ok(path)
}

/// Write the default `buildout.cfg` unless one already exists.
///
/// # Errors
///
/// Returns an error for any filesystem failure other than the file already existing.
pub fn ensure_buildout_cfg(
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    layout: &Layout,
) -> Result<ConfigOutcome> {
    let path = layout.buildout_cfg();
    if fs.write_new(&path, default_buildout_cfg().as_bytes())? {
        reporter.success(&format!(
            "Created a default buildout.cfg file in {}",
            path.display()
        ));
        Ok(ConfigOutcome::Created)
    } else {
        reporter.warn(&format!(
            "Keeping existing buildout.cfg in {}",
            path.display()
        ));
        Ok(ConfigOutcome::Kept)
    }
}

/// Run `bootstrap.py` with the runtime's interpreter, then `bin/buildout`.
///
/// `bin/buildout` is never run if the bootstrap fails.
///
/// # Errors
///
/// Returns `CommandFailed` carrying the child's exit code if either program fails.
pub async fn bootstrap_buildout(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    layout: &Layout,
) -> Result<()> {
    let python = layout.venv_python();
    let python = path_arg(&python)?;
    let script = layout.bootstrap_script();
    let script = path_arg(&script)?;

    reporter.step(&format!("Bootstrapping Buildout using: {python} {script}..."));
    let status = runner
        .run_status(python, &[script], layout.root())
        .await
        .context("running Buildout bootstrap")?;
    ensure_success(python, status)?;

    let buildout = layout.buildout_bin();
    let buildout = path_arg(&buildout)?;
    reporter.step("Invoking bootstrapped buildout...");
    let status = runner
        .run_status(buildout, &[], layout.root())
        .await
        .context("running bin/buildout")?;
    ensure_success(buildout, status)?;
    Ok(())
}
