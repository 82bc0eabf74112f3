use std::path::{Path, PathBuf};

use pacboot_constants::{DIST_DIR_NAME, DOWNLOAD_DIR_NAME, REPO_NAME, SNAPSHOT_FILE_NAME};

pub struct PathResolver;

impl PathResolver {
    /// Colons show up in epoch-qualified versions (`zlib-1:1.3-1-...`) and
    /// are not safe in every filesystem.
    #[must_use]
    pub fn sanitize_file_name(file_name: &str) -> String {
        file_name.replace(':', "-")
    }

    #[must_use]
    pub fn cache_path(download_dir: &Path, file_name: &str) -> PathBuf {
        download_dir.join(Self::sanitize_file_name(file_name))
    }

    #[must_use]
    pub fn default_download_dir(work_dir: &Path) -> PathBuf {
        work_dir.join(DOWNLOAD_DIR_NAME)
    }

    #[must_use]
    pub fn default_dest_root(work_dir: &Path, arch: &str) -> PathBuf {
        work_dir.join(DIST_DIR_NAME).join(format!("root.{arch}"))
    }

    /// Raw copy of the fetched directory listing.
    #[must_use]
    pub fn raw_index_path(work_dir: &Path, arch: &str) -> PathBuf {
        work_dir.join(format!("{arch}-{REPO_NAME}.repo"))
    }

    #[must_use]
    pub fn snapshot_path(work_dir: &Path) -> PathBuf {
        work_dir.join(SNAPSHOT_FILE_NAME)
    }
}
