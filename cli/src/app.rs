//! Application context — unified state passed to the command handler.
//!
//! `AppContext` bundles the output context and the effective configuration
//! so the handler signature stays stable when a cross-cutting concern is added.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::BootstrapConfig;
use crate::infra::config::YamlConfigStore;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to the command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Effective configuration (file plus environment overrides).
    pub config: BootstrapConfig,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and the YAML config store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be loaded.
    pub fn new(flags: &OutputFlags) -> Result<Self> {
        Self::with_store(flags, &YamlConfigStore)
    }

    /// Construct an `AppContext` loading configuration from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if `store` fails to load.
    pub fn with_store(flags: &OutputFlags, store: &impl ConfigStore) -> Result<Self> {
        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            config: store.load()?,
        })
    }

    /// Progress reporter writing to this context's terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
