use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use pacboot_constants::{
    DEFAULT_ARCH, DEFAULT_BRANCH, DEFAULT_CA_BUNDLE, DEFAULT_HOSTNAME, DEFAULT_RESOLV_CONF,
    DEFAULT_WORK_DIR, DESCRIPTION, REPOSITORY_URL, VERSION,
};
use pacboot_core::BootstrapOptions;
use pacboot_resolver::VersionOrder;

#[derive(Parser, Debug)]
#[command(name = "pacboot")]
#[command(version = VERSION)]
#[command(about = DESCRIPTION, long_about = None)]
#[command(after_help = format!("For more information, visit <{REPOSITORY_URL}>"))]
pub struct Cli {
    /// Target architecture (e.g. x86_64, aarch64, armv7h)
    #[arg(short = 'a', long, default_value = DEFAULT_ARCH)]
    pub arch: String,
    /// Repository base URL [default: depends on the architecture]
    #[arg(short = 'r', long = "repo", value_name = "URL")]
    pub repo: Option<String>,
    /// Working directory for the index, snapshot and output tree
    #[arg(short = 'w', long = "work-dir", default_value = DEFAULT_WORK_DIR)]
    pub work_dir: PathBuf,
    /// Where downloaded archives are cached [default: <WORK_DIR>/download]
    #[arg(long = "download-dir")]
    pub download_dir: Option<PathBuf>,
    /// Repository branch (ignored by ARM mirrors)
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,
    /// Root of the generated tree [default: <WORK_DIR>/dist/root.<ARCH>]
    #[arg(long = "dest-dir")]
    pub dest_dir: Option<PathBuf>,
    /// How versions of the same package are compared
    #[arg(long = "version-order", value_enum, default_value_t = VersionOrderArg::Lexical)]
    pub version_order: VersionOrderArg,
    /// Parallel downloads
    #[arg(short = 'j', long, default_value_t = 1)]
    pub jobs: usize,
    /// Additional package to install (repeatable)
    #[arg(long = "extra-package", value_name = "NAME")]
    pub extra_packages: Vec<String>,
    /// Hostname written into the tree
    #[arg(long, default_value = DEFAULT_HOSTNAME)]
    pub hostname: String,
    /// Resolver config copied into the tree
    #[arg(long = "resolv-conf", default_value = DEFAULT_RESOLV_CONF)]
    pub resolv_conf: PathBuf,
    /// CA bundle copied into the tree
    #[arg(long = "ca-bundle", default_value = DEFAULT_CA_BUNDLE)]
    pub ca_bundle: PathBuf,
    /// Only install packages, leave configuration files alone
    #[arg(long = "skip-configure")]
    pub skip_configure: bool,
    /// Only print errors
    #[arg(short = 'q', long)]
    pub quiet: bool,
    /// Enable debug mode for verbose output
    #[arg(long)]
    pub debug: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VersionOrderArg {
    /// Plain string comparison
    Lexical,
    /// pacman's vercmp rules
    Alpm,
}

impl From<VersionOrderArg> for VersionOrder {
    fn from(arg: VersionOrderArg) -> Self {
        match arg {
            VersionOrderArg::Lexical => Self::Lexical,
            VersionOrderArg::Alpm => Self::Alpm,
        }
    }
}

impl Cli {
    #[must_use]
    pub fn to_options(&self) -> BootstrapOptions {
        BootstrapOptions {
            arch: self.arch.clone(),
            repo_url: self.repo.clone(),
            branch: self.branch.clone(),
            work_dir: self.work_dir.clone(),
            download_dir: self.download_dir.clone(),
            dest_dir: self.dest_dir.clone(),
            version_order: self.version_order.into(),
            jobs: self.jobs,
            extra_packages: self.extra_packages.clone(),
            hostname: self.hostname.clone(),
            resolv_conf: self.resolv_conf.clone(),
            ca_bundle: self.ca_bundle.clone(),
            skip_configure: self.skip_configure,
            debug: self.debug,
        }
    }
}
