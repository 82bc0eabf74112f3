use pacboot_error::{BootstrapError, Result};
use pacboot_registry::Transport;
use pacboot_resolver::{IgnoreList, IndexParser, PackageIndex};
use pacboot_store::PathResolver;
use pacboot_utils::write_text_file;

use crate::context::BootstrapContext;

/// Downloads the core listing and parses it into the current index.
///
/// The raw listing is kept as `<work_dir>/<arch>-core.repo` and the parsed
/// result as a JSON snapshot next to it.
pub fn fetch_packages<T: Transport + ?Sized>(
    context: &BootstrapContext,
    transport: &T,
) -> Result<PackageIndex> {
    let options = &context.options;
    let url = context.endpoint.core_url();

    pacboot_logger::status(&format!("Fetching package index from {url}"));
    let document = transport.fetch_text(url)?;

    let raw_path = PathResolver::raw_index_path(&options.work_dir, &options.arch);
    write_text_file(&raw_path, &document)?;
    pacboot_logger::debug(
        &format!("Saved raw index to {}", raw_path.display()),
        options.debug,
    );

    let parser = IndexParser::new(&options.arch, IgnoreList::default(), options.version_order)?;
    let index = parser.parse(&document)?;

    if options.debug {
        let mut records: Vec<_> = index.records().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        for record in records {
            pacboot_logger::debug(
                &format!(
                    "{} {} ({}, updated {})",
                    record.name(),
                    record.version(),
                    record.file_name(),
                    record.update_time()
                ),
                true,
            );
        }
    }

    let snapshot_path = PathResolver::snapshot_path(&options.work_dir);
    index.to_snapshot().save(&snapshot_path).map_err(|e| {
        BootstrapError::SnapshotError(format!("Failed to write {}: {e}", snapshot_path.display()))
    })?;

    pacboot_logger::info(&format!(
        "Indexed {} packages ({} version order)",
        index.len(),
        parser.order()
    ));

    Ok(index)
}
