//! Helpers shared by services that spawn external programs.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::BootstrapError;

/// Turn a non-zero exit status into a `BootstrapError`.
///
/// # Errors
///
/// Returns `CommandFailed` with the child's exit code, or `CommandKilled`
/// when the child has no exit code (terminated by a signal).
pub fn ensure_success(program: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    let program = program.to_string();
    match status.code() {
        Some(code) => Err(BootstrapError::CommandFailed { program, code }.into()),
        None => Err(BootstrapError::CommandKilled { program }.into()),
    }
}

/// Borrow `path` as `&str` for use as a program name or argument.
///
/// # Errors
///
/// Returns `NonUtf8Path` if the path is not valid UTF-8.
pub fn path_arg(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| BootstrapError::NonUtf8Path(path.display().to_string()).into())
}
