//! Shared test helpers: exit statuses and in-memory archives.

#![allow(dead_code)]

use std::process::{ExitStatus, Output};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

pub fn output(code: i32) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: Vec::new(),
    }
}

// ── Archives ─────────────────────────────────────────────────────────────────

/// Gzip-compressed tarball with the given `(path, content)` entries.
pub fn tar_gz(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (path, content) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        builder
            .append_data(&mut header, path, *content)
            .expect("append entry");
    }
    builder
        .into_inner()
        .expect("finish tar")
        .finish()
        .expect("finish gzip")
}

/// A virtualenv source distribution as published on PyPI, reduced to its script.
pub fn virtualenv_archive() -> Vec<u8> {
    tar_gz(&[(
        "virtualenv-1.11.6/virtualenv.py",
        b"# virtualenv stand-in\n".as_slice(),
    )])
}

pub const VIRTUALENV_URL: &str = "https://pypi.example/virtualenv-1.11.6.tar.gz";
pub const BOOTSTRAP_URL: &str = "https://bootstrap.example/bootstrap-buildout.py";
pub const BOOTSTRAP_SCRIPT: &[u8] = b"# bootstrap-buildout stand-in\n";

pub fn test_config() -> bootstrap_venv::domain::BootstrapConfig {
    bootstrap_venv::domain::BootstrapConfig {
        virtualenv_url: VIRTUALENV_URL.to_string(),
        bootstrap_url: BOOTSTRAP_URL.to_string(),
        python: "python".to_string(),
    }
}
