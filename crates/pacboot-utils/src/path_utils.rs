use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use pacboot_error::{BootstrapError, Result};

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| {
            BootstrapError::Io(format!("Failed to create {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

/// Creates the file if missing, leaving existing content untouched
pub fn touch_file(path: &Path) -> Result<()> {
    ensure_parent_exists(path)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BootstrapError::Io(format!("Failed to touch {}: {e}", path.display())))?;
    Ok(())
}

pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    ensure_parent_exists(path)?;
    fs::write(path, text)
        .map_err(|e| BootstrapError::Io(format!("Failed to write {}: {e}", path.display())))
}

pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    ensure_parent_exists(dest)?;
    fs::copy(source, dest).map_err(|e| {
        BootstrapError::Io(format!(
            "Failed to copy {} to {}: {e}",
            source.display(),
            dest.display()
        ))
    })?;
    Ok(())
}

/// Joins a root-relative path such as `etc/pacman.d` onto the target root
pub fn root_path(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

fn ensure_parent_exists(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir_exists(parent),
        _ => Ok(()),
    }
}
