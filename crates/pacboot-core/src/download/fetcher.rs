use std::path::{Path, PathBuf};

use pacboot_error::{BootstrapError, Result};
use pacboot_registry::{RepoEndpoint, Transport};
use pacboot_resolver::PackageRecord;
use pacboot_store::PathResolver;
use pacboot_utils::ensure_dir_exists;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The file was already on disk; nothing was requested.
    AlreadyPresent,
    /// Bytes written by a fresh download.
    Downloaded(u64),
}

pub struct PackageDownloader<'a, T: Transport + ?Sized> {
    transport: &'a T,
    debug: bool,
}

impl<'a, T: Transport + ?Sized> PackageDownloader<'a, T> {
    pub const fn new(transport: &'a T, debug: bool) -> Self {
        Self { transport, debug }
    }

    /// Makes sure `path` holds the body of `url`.
    ///
    /// The body is streamed into a temporary sibling and renamed onto `path`
    /// once complete. A partial download never appears at `path`.
    pub fn fetch_file(&self, path: &Path, url: &str) -> Result<FetchOutcome> {
        if path.exists() {
            pacboot_logger::debug(
                &format!("Skipping download, {} exists", path.display()),
                self.debug,
            );
            return Ok(FetchOutcome::AlreadyPresent);
        }

        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        ensure_dir_exists(dir)?;

        let prefix = path
            .file_name()
            .map(|name| format!("{}.", name.to_string_lossy()))
            .unwrap_or_default();
        let mut temp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| {
                BootstrapError::Io(format!("Failed to create temp file in {}: {e}", dir.display()))
            })?;

        pacboot_logger::debug(&format!("GET {url}"), self.debug);
        let bytes = self.transport.download(url, temp.as_file_mut())?;

        temp.persist(path).map_err(|e| {
            BootstrapError::Io(format!(
                "Failed to move download into {}: {}",
                path.display(),
                e.error
            ))
        })?;

        Ok(FetchOutcome::Downloaded(bytes))
    }

    /// Fetches the archive of `record` into `download_dir` and returns its
    /// local path.
    pub fn fetch_record(
        &self,
        endpoint: &RepoEndpoint,
        download_dir: &Path,
        record: &PackageRecord,
    ) -> Result<(PathBuf, FetchOutcome)> {
        let path = PathResolver::cache_path(download_dir, record.file_name());
        let url = endpoint.file_url(record.file_name());
        let outcome = self.fetch_file(&path, &url)?;

        match outcome {
            FetchOutcome::AlreadyPresent => {
                pacboot_logger::debug(&format!("Using cached {}", record.file_name()), self.debug);
            }
            FetchOutcome::Downloaded(bytes) => {
                pacboot_logger::debug(
                    &format!("Downloaded {} ({bytes} bytes)", record.file_name()),
                    self.debug,
                );
            }
        }

        Ok((path, outcome))
    }
}
