use std::path::PathBuf;

use pacboot_constants::{
    BASE_PACKAGES, DEFAULT_ARCH, DEFAULT_BRANCH, DEFAULT_CA_BUNDLE, DEFAULT_HOSTNAME,
    DEFAULT_RESOLV_CONF, DEFAULT_WORK_DIR,
};
use pacboot_error::Result;
use pacboot_registry::RepoEndpoint;
use pacboot_resolver::VersionOrder;
use pacboot_store::PathResolver;
use pacboot_utils::ensure_dir_exists;

#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub arch: String,
    /// `None` picks the default mirror for `arch`.
    pub repo_url: Option<String>,
    pub branch: String,
    pub work_dir: PathBuf,
    pub download_dir: Option<PathBuf>,
    pub dest_dir: Option<PathBuf>,
    pub version_order: VersionOrder,
    pub jobs: usize,
    pub extra_packages: Vec<String>,
    pub hostname: String,
    pub resolv_conf: PathBuf,
    pub ca_bundle: PathBuf,
    pub skip_configure: bool,
    pub debug: bool,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            arch: DEFAULT_ARCH.to_string(),
            repo_url: None,
            branch: DEFAULT_BRANCH.to_string(),
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
            download_dir: None,
            dest_dir: None,
            version_order: VersionOrder::default(),
            jobs: 1,
            extra_packages: Vec::new(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            resolv_conf: PathBuf::from(DEFAULT_RESOLV_CONF),
            ca_bundle: PathBuf::from(DEFAULT_CA_BUNDLE),
            skip_configure: false,
            debug: false,
        }
    }
}

impl BootstrapOptions {
    /// Base packages followed by any extras, in request order.
    #[must_use]
    pub fn package_names(&self) -> Vec<String> {
        BASE_PACKAGES
            .iter()
            .map(|name| (*name).to_string())
            .chain(self.extra_packages.iter().cloned())
            .collect()
    }
}

/// Options with every derived location filled in.
#[derive(Debug, Clone)]
pub struct BootstrapContext {
    pub options: BootstrapOptions,
    pub endpoint: RepoEndpoint,
    pub download_dir: PathBuf,
    pub dest_dir: PathBuf,
}

impl BootstrapContext {
    /// Creates the work, download and destination directories.
    pub fn new(options: BootstrapOptions) -> Result<Self> {
        let endpoint = RepoEndpoint::with_default_mirror(
            options.repo_url.as_deref(),
            &options.arch,
            &options.branch,
        );
        let download_dir = options
            .download_dir
            .clone()
            .unwrap_or_else(|| PathResolver::default_download_dir(&options.work_dir));
        let dest_dir = options
            .dest_dir
            .clone()
            .unwrap_or_else(|| PathResolver::default_dest_root(&options.work_dir, &options.arch));

        ensure_dir_exists(&options.work_dir)?;
        ensure_dir_exists(&download_dir)?;
        ensure_dir_exists(&dest_dir)?;

        Ok(Self {
            options,
            endpoint,
            download_dir,
            dest_dir,
        })
    }

    #[must_use]
    pub const fn debug(&self) -> bool {
        self.options.debug
    }
}
