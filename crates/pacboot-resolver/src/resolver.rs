use indexmap::IndexMap;

use pacboot_error::{BootstrapError, Result};

use crate::index::PackageIndex;
use crate::record::PackageRecord;

/// Records to fetch, in the order their names were first requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionPlan {
    packages: IndexMap<String, PackageRecord>,
}

impl ResolutionPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.get(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &PackageRecord> {
        self.packages.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }
}

/// Binds every requested name to its current record in `index`.
///
/// Stops at the first name the index does not know. Repeated names resolve
/// to the same record and appear once in the plan.
pub fn resolve<S: AsRef<str>>(index: &PackageIndex, request: &[S]) -> Result<ResolutionPlan> {
    let mut plan = ResolutionPlan::default();

    for name in request {
        let name = name.as_ref();
        if plan.packages.contains_key(name) {
            continue;
        }

        let record = index
            .get(name)
            .ok_or_else(|| BootstrapError::UnresolvedPackage(name.to_string()))?;
        plan.packages.insert(name.to_string(), record.clone());
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::VersionOrder;
    use chrono::NaiveDate;

    fn index_of(entries: &[(&str, &str)]) -> PackageIndex {
        let stamp = NaiveDate::from_ymd_opt(2023, 1, 5)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap();
        let mut index = PackageIndex::new();
        for (name, version) in entries {
            let record = PackageRecord::new(
                *name,
                *version,
                format!("{name}-{version}-x86_64.pkg.tar.zst"),
                stamp,
            )
            .unwrap();
            index.insert_if_newer(record, VersionOrder::Lexical);
        }
        index
    }

    #[test]
    fn test_resolves_in_request_order() {
        let index = index_of(&[("glibc", "2.36-6"), ("acl", "2.3.1-3"), ("zlib", "1:1.2.13-1")]);
        let plan = resolve(&index, &["zlib", "acl", "glibc"]).unwrap();

        assert_eq!(plan.names().collect::<Vec<_>>(), vec!["zlib", "acl", "glibc"]);
        assert_eq!(plan.get("zlib").unwrap().version(), "1:1.2.13-1");
    }

    #[test]
    fn test_duplicates_resolve_once() {
        let index = index_of(&[("acl", "2.3.1-3"), ("attr", "2.5.1-2")]);
        let plan = resolve(&index, &["acl", "attr", "acl"]).unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.names().collect::<Vec<_>>(), vec!["acl", "attr"]);
    }

    #[test]
    fn test_fails_on_first_missing_name() {
        let index = index_of(&[("acl", "2.3.1-3")]);
        let result = resolve(&index, &["acl", "missing-one", "missing-two"]);

        assert!(matches!(
            result,
            Err(BootstrapError::UnresolvedPackage(ref name)) if name == "missing-one"
        ));
    }

    #[test]
    fn test_empty_request_is_empty_plan() {
        let index = index_of(&[("acl", "2.3.1-3")]);
        let empty: [&str; 0] = [];
        assert!(resolve(&index, &empty).unwrap().is_empty());
    }

    #[test]
    fn test_owned_names_accepted() {
        let index = index_of(&[("acl", "2.3.1-3")]);
        let request = vec!["acl".to_string()];
        assert_eq!(resolve(&index, request.as_slice()).unwrap().len(), 1);
    }
}
