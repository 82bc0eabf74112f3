pub mod configure;
pub mod context;
pub mod download;
pub mod index;
pub mod install;

#[cfg(test)]
mod test_support;

pub use configure::{configure_minimal_system, configure_pacman};
pub use context::{BootstrapContext, BootstrapOptions};
pub use download::{FetchOutcome, PackageDownloader};
pub use index::fetch_packages;
pub use install::install_packages;

use pacboot_error::Result;
use pacboot_registry::{HttpTransport, Transport};
use pacboot_resolver::resolve;

/// Runs the whole pipeline: index, resolve, fetch and extract, configure.
pub fn run_bootstrap<T: Transport + ?Sized>(
    options: BootstrapOptions,
    transport: &T,
) -> Result<BootstrapContext> {
    let context = BootstrapContext::new(options)?;
    let debug = context.debug();

    pacboot_logger::debug(&format!("Core repository: {}", context.endpoint.core_url()), debug);
    pacboot_logger::debug(&format!("Download cache: {}", context.download_dir.display()), debug);

    let index = fetch_packages(&context, transport)?;
    let names = context.options.package_names();
    let plan = resolve(&index, names.as_slice())?;
    pacboot_logger::info(&format!("Resolved {} packages", plan.len()));

    install_packages(&context, transport, &plan)?;

    if context.options.skip_configure {
        pacboot_logger::warn("Skipping system configuration");
    } else {
        configure_pacman(
            &context.dest_dir,
            context.endpoint.repo_url(),
            &context.options.resolv_conf,
            debug,
        )?;
        configure_minimal_system(
            &context.dest_dir,
            &context.options.hostname,
            &context.options.ca_bundle,
            debug,
        )?;
        pacboot_logger::success("System configured");
    }

    Ok(context)
}

pub fn bootstrap(options: BootstrapOptions) -> anyhow::Result<()> {
    let transport = HttpTransport::new().map_err(|e| anyhow::anyhow!(e))?;
    let context = run_bootstrap(options, &transport).map_err(|e| anyhow::anyhow!(e))?;

    pacboot_logger::success(&format!(
        "Root filesystem ready at {}",
        context.dest_dir.display()
    ));
    Ok(())
}
