use chrono::NaiveDateTime;

use pacboot_error::{BootstrapError, Result};
use pacboot_snapshot::SnapshotEntry;

/// One concrete package archive listed in the repository index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: String,
    version: String,
    file_name: String,
    update_time: NaiveDateTime,
}

impl PackageRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        file_name: impl Into<String>,
        update_time: NaiveDateTime,
    ) -> Result<Self> {
        let name = name.into();
        let file_name = file_name.into();

        if name.is_empty() {
            return Err(BootstrapError::InvalidRecord(format!(
                "empty package name for '{file_name}'"
            )));
        }
        if file_name.is_empty() {
            return Err(BootstrapError::InvalidRecord(format!(
                "empty file name for package '{name}'"
            )));
        }

        Ok(Self {
            name,
            version: version.into(),
            file_name,
            update_time,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The archive name exactly as listed; used verbatim in download URLs.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Modification time from the listing. Diagnostic only: it never takes
    /// part in choosing between two records.
    #[must_use]
    pub const fn update_time(&self) -> NaiveDateTime {
        self.update_time
    }

    #[must_use]
    pub fn to_snapshot_entry(&self) -> SnapshotEntry {
        SnapshotEntry {
            name: self.name.clone(),
            version: self.version.clone(),
            file_name: self.file_name.clone(),
        }
    }
}
