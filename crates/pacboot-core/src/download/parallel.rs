use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use pacboot_error::{BootstrapError, Result};
use pacboot_registry::{RepoEndpoint, Transport};
use pacboot_resolver::ResolutionPlan;

use super::fetcher::{FetchOutcome, PackageDownloader};

impl<T: Transport + ?Sized> PackageDownloader<'_, T> {
    /// Fetches every archive of `plan` on a pool of `jobs` threads.
    ///
    /// Returns how many archives were actually downloaded. The first failure
    /// stops the remaining work.
    pub fn prefetch(
        &self,
        endpoint: &RepoEndpoint,
        download_dir: &Path,
        plan: &ResolutionPlan,
        jobs: usize,
    ) -> Result<usize> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs.max(1))
            .build()
            .map_err(|e| BootstrapError::Io(format!("Failed to start download pool: {e}")))?;

        let records: Vec<_> = plan.records().collect();
        let total = records.len();
        let done = AtomicUsize::new(0);
        let downloaded = AtomicUsize::new(0);

        pacboot_logger::status(&format!("Downloading {total} packages with {jobs} jobs..."));

        pool.install(|| {
            records.par_iter().try_for_each(|record| {
                let (_, outcome) = self.fetch_record(endpoint, download_dir, record)?;
                if matches!(outcome, FetchOutcome::Downloaded(_)) {
                    downloaded.fetch_add(1, Ordering::Relaxed);
                }
                let current = done.fetch_add(1, Ordering::Relaxed) + 1;
                pacboot_logger::progress(&format!("Fetched {}", record.name()), current, total);
                Ok::<(), BootstrapError>(())
            })
        })?;

        Ok(downloaded.load(Ordering::Relaxed))
    }
}
