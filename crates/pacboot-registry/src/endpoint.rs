use pacboot_constants::{DEFAULT_ARM_REPO_URL, DEFAULT_REPO_URL, REPO_NAME};

/// Where the core repository of one architecture lives on a mirror.
///
/// ARM mirrors lay repositories out as `<repo>/<arch>/core`; the others as
/// `<repo>/<branch>/core/<arch>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEndpoint {
    repo_url: String,
    core_url: String,
}

impl RepoEndpoint {
    #[must_use]
    pub fn new(repo_url: &str, arch: &str, branch: &str) -> Self {
        let repo_url = repo_url.trim_end_matches('/').to_string();
        let core_url = if is_arm_arch(arch) {
            format!("{repo_url}/{arch}/{REPO_NAME}")
        } else {
            format!("{repo_url}/{branch}/{REPO_NAME}/{arch}")
        };

        Self { repo_url, core_url }
    }

    /// Uses the default mirror for `arch` when no repository is given.
    #[must_use]
    pub fn with_default_mirror(repo_url: Option<&str>, arch: &str, branch: &str) -> Self {
        let repo_url = repo_url.unwrap_or_else(|| default_repo_url(arch));
        Self::new(repo_url, arch, branch)
    }

    #[must_use]
    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    /// URL of the directory listing that serves as the package index.
    #[must_use]
    pub fn core_url(&self) -> &str {
        &self.core_url
    }

    /// The file name goes into the URL unchanged.
    #[must_use]
    pub fn file_url(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.core_url)
    }
}

#[must_use]
pub fn is_arm_arch(arch: &str) -> bool {
    arch.starts_with("arm") || arch.starts_with("aarch64")
}

#[must_use]
pub fn default_repo_url(arch: &str) -> &'static str {
    if is_arm_arch(arch) {
        DEFAULT_ARM_REPO_URL
    } else {
        DEFAULT_REPO_URL
    }
}
