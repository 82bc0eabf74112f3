use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::Cli;
use pacboot_constants::{BIN_NAME, VERSION};
use pacboot_core::BootstrapOptions;

pub struct BootstrapHandler;

impl BootstrapHandler {
    pub fn handle(cli: &Cli) -> Result<()> {
        let options = cli.to_options();
        if !cli.quiet {
            Self::print_header(&options);
        }

        pacboot_core::bootstrap(options)
    }

    fn print_header(options: &BootstrapOptions) {
        println!(
            "{} {} {}",
            BIN_NAME.bright_cyan().bold(),
            format!("v{VERSION}").bright_black(),
            options.arch.bright_white()
        );
        if let Some(repo) = &options.repo_url {
            println!("{} {}", "mirror".bright_black(), repo.bright_white());
        }
        println!();
    }
}
