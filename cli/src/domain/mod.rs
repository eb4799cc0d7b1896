//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod buildout;
pub mod config;
pub mod digest;
pub mod error;
pub mod layout;
pub mod virtualenv;

pub use buildout::default_buildout_cfg;
pub use config::{BootstrapConfig, validate_config, validate_url};
pub use error::{BootstrapError, ConfigError};
pub use layout::Layout;
pub use virtualenv::{EnvironmentOptions, VirtualenvTool, create_environment_args};
