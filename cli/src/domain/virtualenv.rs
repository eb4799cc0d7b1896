//! The virtualenv capability and the options passed to it.
//!
//! Pure functions only — building command lines, no spawning.

use std::path::PathBuf;

/// Module name probed with `python -c "import virtualenv"`.
pub const VIRTUALENV_MODULE: &str = "virtualenv";

/// How to invoke virtualenv on this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VirtualenvTool {
    /// Importable by the host interpreter: `python -m virtualenv`.
    Installed { python: String },
    /// Unpacked from the source archive: `python <dist>/virtualenv.py`.
    Fetched { python: String, script: PathBuf },
}

impl VirtualenvTool {
    /// Interpreter that runs virtualenv.
    #[must_use]
    pub fn python(&self) -> &str {
        match self {
            Self::Installed { python } | Self::Fetched { python, .. } => python,
        }
    }

    /// Where virtualenv was found, for progress output.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Installed { python } => format!("{VIRTUALENV_MODULE} module of {python}"),
            Self::Fetched { script, .. } => script.display().to_string(),
        }
    }

    /// Arguments (after the interpreter) that select virtualenv.
    #[must_use]
    pub fn entry_args(&self) -> Vec<String> {
        match self {
            Self::Installed { .. } => vec!["-m".to_string(), VIRTUALENV_MODULE.to_string()],
            Self::Fetched { script, .. } => vec![script.display().to_string()],
        }
    }
}

/// Knobs of virtualenv's environment creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentOptions {
    /// Give the environment access to the global site-packages.
    pub system_site_packages: bool,
    /// Delete the target's previous contents first.
    pub clear: bool,
    /// Unzip setuptools when installing it.
    pub unzip_setuptools: bool,
}

impl EnvironmentOptions {
    /// Options used for the Buildout runtime: isolated, always fresh.
    pub const BUILDOUT: Self = Self {
        system_site_packages: false,
        clear: true,
        unzip_setuptools: false,
    };

    /// Render as virtualenv command-line flags.
    #[must_use]
    pub fn to_args(self) -> Vec<&'static str> {
        let mut args = Vec::new();
        if self.system_site_packages {
            args.push("--system-site-packages");
        }
        if self.clear {
            args.push("--clear");
        }
        if self.unzip_setuptools {
            args.push("--unzip-setuptools");
        }
        args
    }
}

/// Full argument list for creating `target` with `tool` and `options`.
#[must_use]
pub fn create_environment_args(
    tool: &VirtualenvTool,
    options: EnvironmentOptions,
    target: &str,
) -> Vec<String> {
    let mut args = tool.entry_args();
    args.extend(options.to_args().into_iter().map(str::to_string));
    args.push(target.to_string());
    args
}
