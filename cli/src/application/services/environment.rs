//! Application service — locate or fetch virtualenv, then create the
//! isolated runtime under `parts/venv`.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{
    ArchiveExtractor, CommandRunner, HttpFetcher, LocalFs, ProgressReporter,
};
use crate::application::services::process::{ensure_success, path_arg};
use crate::domain::digest::{format_size, sha256_hex};
use crate::domain::layout::VIRTUALENV_SCRIPT;
use crate::domain::virtualenv::VIRTUALENV_MODULE;
use crate::domain::{
    BootstrapError, EnvironmentOptions, Layout, VirtualenvTool, create_environment_args,
};

/// Check whether `python` can already import virtualenv.
///
/// Returns `None` when the import fails or the interpreter cannot be spawned;
/// both mean "fetch it".
///
/// # Errors
///
/// Returns an error if the probe times out; a hung interpreter would not run
/// virtualenv either.
pub async fn locate_virtualenv(
    runner: &impl CommandRunner,
    python: &str,
) -> Result<Option<VirtualenvTool>> {
    let probe = format!("import {VIRTUALENV_MODULE}");
    match runner.run(python, &["-c", &probe]).await {
        Ok(output) if output.status.success() => Ok(Some(VirtualenvTool::Installed {
            python: python.to_string(),
        })),
        Ok(_) => Ok(None),
        Err(e) if matches!(
            e.downcast_ref::<BootstrapError>(),
            Some(BootstrapError::CommandTimedOut { .. })
        ) =>
        {
            Err(e.context(format!("probing {python} for virtualenv")))
        }
        Err(_) => Ok(None),
    }
}

/// Download the virtualenv source archive and unpack it into `parts/venv-dist`.
///
/// The first entry of `venv-dist` is taken as the distribution root and must
/// contain `virtualenv.py`.
///
/// # Errors
///
/// Returns an error if the download or extraction fails, or the archive does
/// not hold a virtualenv distribution.
pub fn fetch_virtualenv(
    fetcher: &impl HttpFetcher,
    extractor: &impl ArchiveExtractor,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    layout: &Layout,
    url: &str,
    python: &str,
) -> Result<VirtualenvTool> {
    reporter.step(&format!("Downloading virtualenv from {url}"));
    let archive = fetcher.fetch(url).context("downloading virtualenv")?;
    reporter.success(&format!(
        "Downloaded virtualenv ({}, sha256 {})",
        format_size(archive.len()),
        sha256_hex(&archive)
    ));

    let dist = layout.venv_dist_dir();
    fs.create_dir_all(&dist)?;
    extractor
        .extract_tar_gz(&archive, &dist)
        .with_context(|| format!("extracting virtualenv into {}", dist.display()))?;

    let root = fs
        .first_entry(&dist)?
        .ok_or_else(|| BootstrapError::EmptyArchive(dist.display().to_string()))?;
    let script = root.join(VIRTUALENV_SCRIPT);
    if !fs.exists(&script) {
        return Err(BootstrapError::MissingVirtualenvScript(root.display().to_string()).into());
    }

    Ok(VirtualenvTool::Fetched {
        python: python.to_string(),
        script,
    })
}

/// Locate an already-available virtualenv, or fetch one.
///
/// # Errors
///
/// Returns an error if virtualenv is not available and fetching it fails.
#[allow(clippy::too_many_arguments)]
pub async fn resolve_virtualenv(
    runner: &impl CommandRunner,
    fetcher: &impl HttpFetcher,
    extractor: &impl ArchiveExtractor,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    layout: &Layout,
    url: &str,
    python: &str,
) -> Result<VirtualenvTool> {
    let tool = match locate_virtualenv(runner, python).await? {
        Some(tool) => tool,
        None => fetch_virtualenv(fetcher, extractor, fs, reporter, layout, url, python)?,
    };
    reporter.success(&format!("Using virtualenv: {}", tool.describe()));
    Ok(tool)
}

/// Create a fresh isolated runtime in `parts/venv`.
///
/// Any previous contents are cleared by virtualenv. Returns the runtime directory.
///
/// # Errors
///
/// Returns an error if virtualenv fails or leaves no interpreter behind.
pub async fn create_environment(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    tool: &VirtualenvTool,
    layout: &Layout,
) -> Result<PathBuf> {
    let venv_dir = layout.venv_dir();
    reporter.step(&format!(
        "Creating virtual environment in {}...",
        venv_dir.display()
    ));

    let args = create_environment_args(tool, EnvironmentOptions::BUILDOUT, path_arg(&venv_dir)?);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let status = runner
        .run_status(tool.python(), &args, layout.root())
        .await
        .context("running virtualenv")?;
    ensure_success(tool.python(), status)?;

    let python = layout.venv_python();
    if !fs.exists(&python) {
        return Err(BootstrapError::InterpreterMissing(python.display().to_string()).into());
    }

    reporter.success(&format!(
        "Virtual environment created in {}.",
        venv_dir.display()
    ));
    Ok(venv_dir)
}
