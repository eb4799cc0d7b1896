//! Bootstrap command — provision `parts/venv` and run Buildout in the destination.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::services::bootstrap::{BootstrapPorts, bootstrap};
use crate::application::services::buildout::ConfigOutcome;
use crate::domain::Layout;
use crate::infra::archive::TarGzExtractor;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::StdFs;
use crate::infra::http::UreqFetcher;

/// Arguments for the bootstrap command.
#[derive(Args)]
pub struct BootstrapArgs {
    /// Directory to bootstrap Buildout in (defaults to the current directory)
    pub destination: Option<PathBuf>,
}

/// Resolve the destination directory: the argument if given, else the
/// current working directory.
///
/// # Errors
///
/// Returns an error if no argument was given and the current directory is unavailable.
pub fn resolve_destination(destination: Option<PathBuf>) -> Result<PathBuf> {
    match destination {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("cannot determine current directory"),
    }
}

/// Run the bootstrap command.
///
/// # Errors
///
/// Returns the first failing step's error.
pub async fn run(app: &AppContext, args: BootstrapArgs) -> Result<()> {
    let destination = resolve_destination(args.destination)?;

    let runner = TokioCommandRunner::default();
    let fetcher = UreqFetcher::new(app.output.show_progress());
    let ports = BootstrapPorts {
        runner: &runner,
        fetcher: &fetcher,
        extractor: &TarGzExtractor,
        fs: &StdFs,
    };

    let report = bootstrap(&ports, &app.config, &destination, &app.reporter()).await?;

    let layout = Layout::new(&report.destination);
    app.output.success(&format!(
        "Buildout environment ready in {}",
        report.destination.display()
    ));
    app.output
        .kv("Interpreter:", &layout.venv_python().display().to_string());
    app.output
        .kv("Buildout:", &layout.buildout_bin().display().to_string());
    if report.buildout_cfg == ConfigOutcome::Created {
        app.output.kv(
            "Next:",
            &format!("edit {} and run bin/buildout", layout.buildout_cfg().display()),
        );
    }
    Ok(())
}
