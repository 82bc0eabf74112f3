use pacboot_error::Result;
use pacboot_registry::Transport;
use pacboot_resolver::ResolutionPlan;
use pacboot_store::ArchiveExtractor;

use crate::context::BootstrapContext;
use crate::download::PackageDownloader;

/// Fetches and extracts every planned package into the destination root.
///
/// Extraction always follows plan order. With more than one job the
/// archives are fetched up front in parallel; otherwise each one is fetched
/// right before it is extracted.
pub fn install_packages<T: Transport + ?Sized>(
    context: &BootstrapContext,
    transport: &T,
    plan: &ResolutionPlan,
) -> Result<()> {
    let debug = context.debug();
    let jobs = context.options.jobs;
    let downloader = PackageDownloader::new(transport, debug);

    if jobs > 1 {
        let downloaded =
            downloader.prefetch(&context.endpoint, &context.download_dir, plan, jobs)?;
        pacboot_logger::debug(&format!("Prefetch downloaded {downloaded} archives"), debug);
    }

    let total = plan.len();
    for (position, record) in plan.records().enumerate() {
        pacboot_logger::progress(&format!("Installing {}", record.name()), position + 1, total);

        let (archive, _) = downloader.fetch_record(&context.endpoint, &context.download_dir, record)?;
        let format = ArchiveExtractor::extract(&archive, &context.dest_dir)?;

        pacboot_logger::debug(
            &format!("Extracted {} ({format}) into {}", record.file_name(), context.dest_dir.display()),
            debug,
        );
    }

    pacboot_logger::finish(&format!(
        "Installed {total} packages into {}",
        context.dest_dir.display()
    ));
    Ok(())
}
