//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::domain::BootstrapError;

/// Bootstrap a Buildout into its own virtualenv environment
#[derive(Parser)]
#[command(name = "bootstrap-venv", version)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(flatten)]
    pub bootstrap: commands::bootstrap::BootstrapArgs,
}

impl Cli {
    /// Execute the bootstrap.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or any bootstrap step fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            bootstrap,
        } = self;
        let app = AppContext::new(&OutputFlags { no_color, quiet })?;
        commands::bootstrap::run(&app, bootstrap).await
    }
}

/// Process exit code for a failed run.
///
/// A failing child process hands its own exit code back; anything else is 1.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|e| e.downcast_ref::<BootstrapError>())
        .map_or(1, BootstrapError::exit_code)
}
