use chrono::NaiveDateTime;
use regex::Regex;
use std::collections::HashSet;

use pacboot_constants::{INDEX_TIME_FORMAT, REPO_NAME, SIGNATURE_SUFFIX};
use pacboot_error::{BootstrapError, Result};

use crate::index::PackageIndex;
use crate::record::PackageRecord;
use crate::version::VersionOrder;

const HREF_PATTERN: &str = r#"<a\s+[^>]*?href="([^"]*?)""#;
const UPDATE_TIME_PATTERN: &str = r"(\d+-\w+-\d+\s\d+:\d+)";
const COMPRESSION_EXTENSIONS: &str = "gz|xz|zst";

/// Listing entries that are never package archives: the parent directory
/// link, repository databases and detached signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreList {
    names: HashSet<String>,
    suffix: String,
}

impl IgnoreList {
    #[must_use]
    pub fn for_repo(repo: &str) -> Self {
        let names = [
            "../".to_string(),
            format!("{repo}.db"),
            format!("{repo}.db.tar.gz"),
            format!("{repo}.files"),
            format!("{repo}.files.tar.gz"),
        ];

        Self {
            names: names.into_iter().collect(),
            suffix: SIGNATURE_SUFFIX.to_string(),
        }
    }

    #[must_use]
    pub fn is_ignored(&self, reference: &str) -> bool {
        self.names.contains(reference) || reference.ends_with(&self.suffix)
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::for_repo(REPO_NAME)
    }
}

/// Turns an HTML directory listing of a repository into a [`PackageIndex`].
///
/// A line without a link is skipped. A link that is neither ignored nor a
/// well-formed `name-version-arch.*.{gz,xz,zst}` archive with a timestamp
/// aborts the whole parse.
pub struct IndexParser {
    href: Regex,
    file_name: Regex,
    update_time: Regex,
    ignored: IgnoreList,
    order: VersionOrder,
}

impl IndexParser {
    pub fn new(arch: &str, ignored: IgnoreList, order: VersionOrder) -> Result<Self> {
        let file_name_pattern = format!(
            r"^([A-Za-z0-9].*?)-(\d[\w\-.:+]*)-(any|{})(?:\.\w+)*\.({COMPRESSION_EXTENSIONS})$",
            regex::escape(arch)
        );

        Ok(Self {
            href: compile(HREF_PATTERN)?,
            file_name: compile(&file_name_pattern)?,
            update_time: compile(UPDATE_TIME_PATTERN)?,
            ignored,
            order,
        })
    }

    #[must_use]
    pub const fn order(&self) -> VersionOrder {
        self.order
    }

    pub fn parse(&self, document: &str) -> Result<PackageIndex> {
        document
            .lines()
            .try_fold(PackageIndex::new(), |mut index, line| -> Result<PackageIndex> {
                if let Some(record) = self.parse_line(line)? {
                    index.insert_if_newer(record, self.order);
                }
                Ok(index)
            })
    }

    /// `Ok(None)` for lines that carry no package: no link at all, or an
    /// ignored link.
    pub fn parse_line(&self, line: &str) -> Result<Option<PackageRecord>> {
        let Some(reference) = self.extract_reference(line) else {
            return Ok(None);
        };

        if self.ignored.is_ignored(reference) {
            return Ok(None);
        }

        let file_name = urlencoding::decode(reference)
            .map_err(|_| BootstrapError::MalformedFileName(reference.to_string()))?
            .into_owned();

        let (name, version) = self.split_file_name(&file_name)?;
        let update_time = self.extract_update_time(line)?;

        PackageRecord::new(name, version, file_name.as_str(), update_time).map(Some)
    }

    fn extract_reference<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.href
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn split_file_name(&self, file_name: &str) -> Result<(String, String)> {
        let caps = self
            .file_name
            .captures(file_name)
            .ok_or_else(|| BootstrapError::MalformedFileName(file_name.to_string()))?;

        match (caps.get(1), caps.get(2)) {
            (Some(name), Some(version)) => {
                Ok((name.as_str().to_string(), version.as_str().to_string()))
            }
            _ => Err(BootstrapError::MalformedFileName(file_name.to_string())),
        }
    }

    fn extract_update_time(&self, line: &str) -> Result<NaiveDateTime> {
        let raw = self
            .update_time
            .captures(line)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| BootstrapError::MalformedTimestamp(line.trim().to_string()))?;

        NaiveDateTime::parse_from_str(raw.as_str(), INDEX_TIME_FORMAT)
            .map_err(|_| BootstrapError::MalformedTimestamp(line.trim().to_string()))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| BootstrapError::InvalidPattern(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parser() -> IndexParser {
        IndexParser::new("x86_64", IgnoreList::default(), VersionOrder::Lexical).unwrap()
    }

    fn entry(file: &str, stamp: &str) -> String {
        format!(r#"<a href="{file}">{file}</a>                                    {stamp}     1048576"#)
    }

    const LISTING: &str = r#"<html>
<head><title>Index of /manjaro/stable/core/x86_64/</title></head>
<body>
<h1>Index of /manjaro/stable/core/x86_64/</h1><hr><pre><a href="../">../</a>
<a href="core.db">core.db</a>                                            05-Jan-2023 09:12      142107
<a href="core.db.tar.gz">core.db.tar.gz</a>                                     05-Jan-2023 09:12      142107
<a href="core.files">core.files</a>                                         05-Jan-2023 09:12     1702315
<a href="core.files.tar.gz">core.files.tar.gz</a>                                  05-Jan-2023 09:12     1702315
<a href="acl-2.3.1-3-x86_64.pkg.tar.zst">acl-2.3.1-3-x86_64.pkg.tar.zst</a>                     11-Oct-2022 18:24      140367
<a href="acl-2.3.1-3-x86_64.pkg.tar.zst.sig">acl-2.3.1-3-x86_64.pkg.tar.zst.sig</a>                 11-Oct-2022 18:24         310
<a href="archlinux-keyring-20221220-1-any.pkg.tar.zst">archlinux-keyring-20221220-1-any.pkg.tar.zst</a>       20-Dec-2022 20:44     1181282
<a href="gcc-libs-12.2.0-1-x86_64.pkg.tar.zst">gcc-libs-12.2.0-1-x86_64.pkg.tar.zst</a>               28-Aug-2022 07:51    32113829
<a href="zlib-1%3A1.2.13-1-x86_64.pkg.tar.zst">zlib-1:1.2.13-1-x86_64.pkg.tar.zst</a>               17-Oct-2022 03:01       97152
</pre><hr></body>
</html>
"#;

    #[test]
    fn test_basic_line() {
        let line = entry("foo-1.2.3-x86_64.pkg.tar.xz", "05-Jan-2023 10:00");
        let record = parser().parse_line(&line).unwrap().unwrap();

        assert_eq!(record.name(), "foo");
        assert_eq!(record.version(), "1.2.3");
        assert_eq!(record.file_name(), "foo-1.2.3-x86_64.pkg.tar.xz");
        assert_eq!(
            record.update_time(),
            NaiveDate::from_ymd_opt(2023, 1, 5)
                .and_then(|d| d.and_hms_opt(10, 0, 0))
                .unwrap()
        );
    }

    #[test]
    fn test_full_listing() {
        let index = parser().parse(LISTING).unwrap();

        assert_eq!(index.len(), 4);
        assert_eq!(index.get("acl").unwrap().version(), "2.3.1-3");
        assert_eq!(index.get("archlinux-keyring").unwrap().version(), "20221220-1");
        assert_eq!(index.get("gcc-libs").unwrap().version(), "12.2.0-1");
    }

    #[test]
    fn test_percent_encoded_reference_is_decoded() {
        let index = parser().parse(LISTING).unwrap();
        let zlib = index.get("zlib").unwrap();

        assert_eq!(zlib.version(), "1:1.2.13-1");
        assert_eq!(zlib.file_name(), "zlib-1:1.2.13-1-x86_64.pkg.tar.zst");
    }

    #[test]
    fn test_invalid_percent_encoding_is_malformed() {
        let line = entry("foo-1.0-1-x86_64.pkg.tar.xz%FF", "05-Jan-2023 10:00");
        assert!(matches!(
            parser().parse(&line),
            Err(BootstrapError::MalformedFileName(_))
        ));
    }

    #[test]
    fn test_lines_without_links_are_skipped() {
        let p = parser();
        assert!(p.parse_line("<html>").unwrap().is_none());
        assert!(p.parse_line("").unwrap().is_none());
        assert!(p.parse_line("<a name=\"top\">top</a>").unwrap().is_none());
    }

    #[test]
    fn test_ignored_names_never_produce_records() {
        let p = parser();
        for name in [
            "../",
            "core.db",
            "core.db.tar.gz",
            "core.files",
            "core.files.tar.gz",
            "foo-1.0-1-x86_64.pkg.tar.zst.sig",
            "anything.sig",
        ] {
            let line = entry(name, "05-Jan-2023 10:00");
            assert!(p.parse_line(&line).unwrap().is_none(), "{name} was not ignored");
        }
    }

    #[test]
    fn test_ignored_names_skip_even_without_timestamp() {
        let line = r#"<a href="core.db">core.db</a>"#;
        assert!(parser().parse_line(line).unwrap().is_none());
    }

    #[test]
    fn test_directory_link_aborts_parse() {
        let document = format!(
            "{}\n{}\n",
            entry("foo-1.0-x86_64.pkg.tar.xz", "05-Jan-2023 10:00"),
            entry("subdir/", "05-Jan-2023 10:00")
        );
        let result = parser().parse(&document);

        assert!(matches!(
            result,
            Err(BootstrapError::MalformedFileName(ref name)) if name == "subdir/"
        ));
    }

    #[test]
    fn test_foreign_architecture_is_malformed() {
        let line = entry("foo-1.0-1-aarch64.pkg.tar.xz", "05-Jan-2023 10:00");
        assert!(matches!(
            parser().parse_line(&line),
            Err(BootstrapError::MalformedFileName(_))
        ));

        let arm = IndexParser::new("aarch64", IgnoreList::default(), VersionOrder::Lexical)
            .unwrap();
        let record = arm.parse_line(&line).unwrap().unwrap();
        assert_eq!(record.version(), "1.0-1");
    }

    #[test]
    fn test_unsupported_compression_is_malformed() {
        let line = entry("foo-1.0-1-x86_64.pkg.tar.bz2", "05-Jan-2023 10:00");
        assert!(matches!(
            parser().parse_line(&line),
            Err(BootstrapError::MalformedFileName(_))
        ));
    }

    #[test]
    fn test_missing_timestamp_aborts_parse() {
        let line = r#"<a href="foo-1.0-x86_64.pkg.tar.xz">foo-1.0-x86_64.pkg.tar.xz</a>   -"#;
        assert!(matches!(
            parser().parse(line),
            Err(BootstrapError::MalformedTimestamp(_))
        ));
    }

    #[test]
    fn test_unparseable_timestamp_aborts_parse() {
        let line = entry("foo-1.0-x86_64.pkg.tar.xz", "45-Foo-2023 10:00");
        assert!(matches!(
            parser().parse_line(&line),
            Err(BootstrapError::MalformedTimestamp(_))
        ));
    }

    #[test]
    fn test_version_replace_scenario() {
        let document = [
            entry("foo-1.0-x86_64.pkg.tar.xz", "01-Jan-2023 10:00"),
            entry("foo-2.0-x86_64.pkg.tar.xz", "02-Jan-2023 10:00"),
            entry("foo-0.9-x86_64.pkg.tar.xz", "03-Jan-2023 10:00"),
        ]
        .join("\n");
        let index = parser().parse(&document).unwrap();

        let foo = index.get("foo").unwrap();
        assert_eq!(foo.version(), "2.0");
        assert_eq!(foo.file_name(), "foo-2.0-x86_64.pkg.tar.xz");
    }

    #[test]
    fn test_newest_wins_for_any_input_order() {
        let versions = ["1.0", "1.10", "1.9", "0.1", "1.2"];
        let document = versions
            .iter()
            .map(|v| entry(&format!("foo-{v}-x86_64.pkg.tar.xz"), "05-Jan-2023 10:00"))
            .collect::<Vec<_>>()
            .join("\n");
        let index = parser().parse(&document).unwrap();

        let kept = index.get("foo").unwrap().version();
        assert!(versions.iter().all(|v| kept >= *v));
        assert_eq!(kept, "1.9");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let p = parser();
        assert_eq!(p.parse(LISTING).unwrap(), p.parse(LISTING).unwrap());
    }
}
