use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, io, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub name: String,
    pub version: String,
    pub file_name: String,
}

/// Audit copy of a parsed index. Written once per run and never read back
/// by the bootstrap itself.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct IndexSnapshot {
    pub packages: BTreeMap<String, SnapshotEntry>,
}

impl IndexSnapshot {
    pub fn load(path: &Path) -> io::Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn insert(&mut self, entry: SnapshotEntry) {
        self.packages.insert(entry.name.clone(), entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<SnapshotEntry> for IndexSnapshot {
    fn from_iter<I: IntoIterator<Item = SnapshotEntry>>(iter: I) -> Self {
        let mut snapshot = Self::default();
        for entry in iter {
            snapshot.insert(entry);
        }
        snapshot
    }
}
