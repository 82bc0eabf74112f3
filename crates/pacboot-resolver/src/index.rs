use std::collections::HashMap;

use pacboot_snapshot::IndexSnapshot;

use crate::record::PackageRecord;
use crate::version::VersionOrder;

/// Package name to the current record for that name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageIndex {
    packages: HashMap<String, PackageRecord>,
}

impl PackageIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `record` only if its name is new or its version sorts strictly
    /// after the stored one. Equal versions keep the first record seen.
    ///
    /// Returns whether the index changed.
    pub fn insert_if_newer(&mut self, record: PackageRecord, order: VersionOrder) -> bool {
        match self.packages.get(record.name()) {
            Some(current) if !order.is_newer(record.version(), current.version()) => false,
            _ => {
                self.packages.insert(record.name().to_string(), record);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &PackageRecord> {
        self.packages.values()
    }

    #[must_use]
    pub fn to_snapshot(&self) -> IndexSnapshot {
        self.records().map(PackageRecord::to_snapshot_entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 5)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    fn record(name: &str, version: &str, hour: u32) -> PackageRecord {
        PackageRecord::new(
            name,
            version,
            format!("{name}-{version}-x86_64.pkg.tar.xz"),
            at(hour),
        )
        .unwrap()
    }

    #[test]
    fn test_newer_version_replaces_older_does_not() {
        let mut index = PackageIndex::new();
        assert!(index.insert_if_newer(record("foo", "1.0", 1), VersionOrder::Lexical));
        assert!(index.insert_if_newer(record("foo", "2.0", 2), VersionOrder::Lexical));
        assert!(!index.insert_if_newer(record("foo", "0.9", 3), VersionOrder::Lexical));

        assert_eq!(index.get("foo").unwrap().version(), "2.0");
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_equal_version_keeps_first_record() {
        let mut index = PackageIndex::new();
        index.insert_if_newer(record("foo", "1.0", 1), VersionOrder::Lexical);
        assert!(!index.insert_if_newer(record("foo", "1.0", 9), VersionOrder::Lexical));

        assert_eq!(index.get("foo").unwrap().update_time(), at(1));
    }

    #[test]
    fn test_update_time_never_breaks_ties() {
        let mut index = PackageIndex::new();
        index.insert_if_newer(record("foo", "2.0", 1), VersionOrder::Lexical);
        index.insert_if_newer(record("foo", "1.0", 23), VersionOrder::Lexical);

        assert_eq!(index.get("foo").unwrap().version(), "2.0");
    }

    #[test]
    fn test_lexical_order_keeps_nine_over_ten() {
        let mut index = PackageIndex::new();
        index.insert_if_newer(record("foo", "9", 1), VersionOrder::Lexical);
        index.insert_if_newer(record("foo", "10", 2), VersionOrder::Lexical);
        assert_eq!(index.get("foo").unwrap().version(), "9");

        let mut index = PackageIndex::new();
        index.insert_if_newer(record("foo", "9", 1), VersionOrder::Alpm);
        index.insert_if_newer(record("foo", "10", 2), VersionOrder::Alpm);
        assert_eq!(index.get("foo").unwrap().version(), "10");
    }

    #[test]
    fn test_snapshot_covers_every_name() {
        let mut index = PackageIndex::new();
        index.insert_if_newer(record("acl", "2.3", 1), VersionOrder::Lexical);
        index.insert_if_newer(record("attr", "2.5", 1), VersionOrder::Lexical);

        let snapshot = index.to_snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.packages["attr"].version, "2.5");
    }
}
