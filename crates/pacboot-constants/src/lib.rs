pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Bootstraps a minimal pacman-based root filesystem from a core repository";
pub const REPOSITORY_URL: &str = "https://github.com/pacboot/pacboot";
pub const BIN_NAME: &str = "pacboot";

pub const USER_AGENT: &str = concat!("pacboot/", env!("CARGO_PKG_VERSION"));
pub const CONNECT_TIMEOUT_SECS: u64 = 20;

pub const DEFAULT_ARCH: &str = "x86_64";
pub const DEFAULT_BRANCH: &str = "stable";
pub const DEFAULT_REPO_URL: &str = "https://mirrors.tuna.tsinghua.edu.cn/manjaro";
pub const DEFAULT_ARM_REPO_URL: &str = "http://mirror.archlinuxarm.org";

/// Only the core repository is bootstrapped from.
pub const REPO_NAME: &str = "core";

pub const DEFAULT_WORK_DIR: &str = "build";
pub const DOWNLOAD_DIR_NAME: &str = "download";
pub const DIST_DIR_NAME: &str = "dist";
pub const SNAPSHOT_FILE_NAME: &str = "core.packages.json";

pub const SIGNATURE_SUFFIX: &str = ".sig";
pub const INDEX_TIME_FORMAT: &str = "%d-%b-%Y %H:%M";

pub const DEFAULT_HOSTNAME: &str = "bootstrap";
pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";
pub const DEFAULT_CA_BUNDLE: &str = "certs/ca-certificates.crt";
pub const CA_BUNDLE_NAME: &str = "ca-certificates.crt";
pub const ROOT_SHADOW_ENTRY: &str = "root:$1$GT9AUpJe$oXANVIjIzcnmOpY07iaGi/:14657::::::";

pub const BASE_PACKAGES: &[&str] = &[
    "libunistring",
    "zstd",
    "libidn2",
    "acl",
    "archlinux-keyring",
    "attr",
    "bzip2",
    "curl",
    "expat",
    "glibc",
    "gpgme",
    "libarchive",
    "libassuan",
    "libgpg-error",
    "libnghttp2",
    "libssh2",
    "lzo",
    "openssl",
    "pacman",
    "xz",
    "zlib",
    "krb5",
    "e2fsprogs",
    "keyutils",
    "libidn",
    "gcc-libs",
    "lz4",
    "libpsl",
    "icu",
    "filesystem",
];

pub const EXAMPLES: &[(&str, &str)] = &[
    ("pacboot", "Bootstrap an x86_64 root tree under ./build"),
    ("pacboot -a aarch64", "Bootstrap from the Arch Linux ARM mirror"),
    (
        "pacboot -r https://mirror.example.org/manjaro --branch testing",
        "Use a different mirror and branch",
    ),
    ("pacboot -j 8", "Prefetch archives with 8 parallel downloads"),
    (
        "pacboot --extra-package sed --extra-package grep",
        "Add packages on top of the base set",
    ),
];
