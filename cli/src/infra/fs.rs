//! Filesystem infrastructure — implements `LocalFs` with `std::fs`.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;

/// Production filesystem implementation of `LocalFs`.
pub struct StdFs;

impl LocalFs for StdFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("creating directory {}", path.display()))
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        std::fs::canonicalize(path).with_context(|| format!("resolving {}", path.display()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        std::fs::write(path, content).with_context(|| format!("writing file {}", path.display()))
    }

    fn write_new(&self, path: &Path, content: &[u8]) -> Result<bool> {
        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if path.is_file() {
                    return Ok(false);
                }
                anyhow::bail!("{} exists but is not a regular file", path.display());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("creating file {}", path.display()));
            }
        };
        file.write_all(content)
            .with_context(|| format!("writing file {}", path.display()))?;
        Ok(true)
    }

    fn first_entry(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let mut entries =
            std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
        entries
            .next()
            .transpose()
            .with_context(|| format!("listing {}", dir.display()))
            .map(|entry| entry.map(|e| e.path()))
    }
}
