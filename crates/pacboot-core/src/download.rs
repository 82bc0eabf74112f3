pub mod fetcher;
pub mod parallel;

pub use fetcher::{FetchOutcome, PackageDownloader};
