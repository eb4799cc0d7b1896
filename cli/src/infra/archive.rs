//! Archive infrastructure — implements `ArchiveExtractor` with `tar` + `flate2`.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::ArchiveExtractor;

/// Unpacks `.tar.gz` archives held in memory.
pub struct TarGzExtractor;

impl ArchiveExtractor for TarGzExtractor {
    fn extract_tar_gz(&self, archive: &[u8], dest: &Path) -> Result<()> {
        let mut tar = tar::Archive::new(flate2::read::GzDecoder::new(Cursor::new(archive)));
        tar.set_preserve_permissions(true);
        tar.unpack(dest)
            .with_context(|| format!("unpacking archive into {}", dest.display()))
    }
}
