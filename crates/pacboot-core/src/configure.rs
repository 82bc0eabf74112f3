use std::path::Path;

use pacboot_constants::{CA_BUNDLE_NAME, ROOT_SHADOW_ENTRY};
use pacboot_error::Result;
use pacboot_utils::{
    copy_file, ensure_dir_exists, root_path, substitute_in_file, touch_file, write_text_file,
};

const CHECK_SPACE_PATTERN: &str = r"^[ \t]*(CheckSpace)";
const CHECK_SPACE_REPLACEMENT: &str = "# ${1}";
const SIG_LEVEL_PATTERN: &str = r"^[ \t]*SigLevel[ \t]*=.*$";
const SIG_LEVEL_REPLACEMENT: &str = "SigLevel = Never";

/// Gives the tree working name resolution and points pacman at the mirror
/// it was bootstrapped from.
pub fn configure_pacman(dest: &Path, repo_url: &str, resolv_conf: &Path, debug: bool) -> Result<()> {
    copy_file(resolv_conf, &root_path(dest, "etc/resolv.conf"))?;
    pacboot_logger::debug(&format!("Copied {}", resolv_conf.display()), debug);

    ensure_dir_exists(&root_path(dest, "etc/pacman.d"))?;
    write_text_file(
        &root_path(dest, "etc/pacman.d/mirrorlist"),
        &format!("Server = {repo_url}\n"),
    )?;
    pacboot_logger::debug(&format!("Mirrorlist set to {repo_url}"), debug);

    Ok(())
}

/// Placeholder account files, hostname, relaxed pacman checks and the CA
/// bundle. `etc/pacman.conf` must already exist in the tree.
pub fn configure_minimal_system(
    dest: &Path,
    hostname: &str,
    ca_bundle: &Path,
    debug: bool,
) -> Result<()> {
    ensure_dir_exists(&root_path(dest, "dev"))?;
    touch_file(&root_path(dest, "etc/group"))?;
    write_text_file(&root_path(dest, "etc/shadow"), &format!("{ROOT_SHADOW_ENTRY}\n"))?;
    write_text_file(&root_path(dest, "etc/hostname"), &format!("{hostname}\n"))?;

    let pacman_conf = root_path(dest, "etc/pacman.conf");
    let check_space = substitute_in_file(&pacman_conf, CHECK_SPACE_PATTERN, CHECK_SPACE_REPLACEMENT)?;
    let sig_level = substitute_in_file(&pacman_conf, SIG_LEVEL_PATTERN, SIG_LEVEL_REPLACEMENT)?;
    pacboot_logger::debug(
        &format!("pacman.conf: {check_space} CheckSpace, {sig_level} SigLevel lines rewritten"),
        debug,
    );

    let certs_dir = root_path(dest, "etc/ssl/certs");
    ensure_dir_exists(&certs_dir)?;
    copy_file(ca_bundle, &certs_dir.join(CA_BUNDLE_NAME))?;

    Ok(())
}
