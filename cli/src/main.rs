//! bootstrap-venv — bootstrap a Buildout into its own virtualenv environment

use bootstrap_venv::cli::{Cli, exit_code};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code(&e));
    }
}
