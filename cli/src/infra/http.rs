//! HTTP infrastructure — implements `HttpFetcher` with `ureq`.

use std::io::Read;

use anyhow::{Context, Result};

use crate::application::ports::HttpFetcher;

/// Upper bound on a single download held in memory.
pub const MAX_DOWNLOAD_BYTES: u64 = 64 * 1024 * 1024;

const USER_AGENT: &str = concat!("bootstrap-venv/", env!("CARGO_PKG_VERSION"));

/// Blocking GET downloads. Shows a progress bar when `show_progress` is set.
///
/// A body larger than `max_bytes` is an error, never a truncated result.
pub struct UreqFetcher {
    show_progress: bool,
    max_bytes: u64,
}

impl UreqFetcher {
    #[must_use]
    pub fn new(show_progress: bool) -> Self {
        Self {
            show_progress,
            max_bytes: MAX_DOWNLOAD_BYTES,
        }
    }

    /// Replace the default `MAX_DOWNLOAD_BYTES` cap.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

impl HttpFetcher for UreqFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = match ureq::get(url).set("User-Agent", USER_AGENT).call() {
            Ok(r) => r,
            Err(ureq::Error::Status(code, _)) => anyhow::bail!("download failed: HTTP {code} from {url}"),
            Err(ureq::Error::Transport(e)) => {
                return Err(anyhow::Error::new(e))
                    .with_context(|| format!("cannot download {url}: no network connection"));
            }
        };

        let total = response
            .header("Content-Length")
            .and_then(|v| v.parse::<u64>().ok());
        if let Some(len) = total
            && len > self.max_bytes
        {
            anyhow::bail!("download from {url} exceeds {} bytes", self.max_bytes);
        }
        let pb = make_progress_bar(self.show_progress, total);

        let mut data = Vec::new();
        pb.wrap_read(response.into_reader().take(self.max_bytes + 1))
            .read_to_end(&mut data)
            .with_context(|| format!("download interrupted: {url}"))?;
        pb.finish_and_clear();
        if data.len() as u64 > self.max_bytes {
            anyhow::bail!("download from {url} exceeds {} bytes", self.max_bytes);
        }
        Ok(data)
    }
}

fn make_progress_bar(show: bool, total: Option<u64>) -> indicatif::ProgressBar {
    if !show {
        return indicatif::ProgressBar::hidden();
    }
    let Some(len) = total else {
        return indicatif::ProgressBar::new_spinner();
    };
    let pb = indicatif::ProgressBar::new(len);
    pb.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("    {bar:40.cyan/dim} {percent}%  {bytes}/{total_bytes}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
            .progress_chars("━━─"),
    );
    pb
}
