pub mod commands;
pub mod handlers;

use clap::{CommandFactory, FromArgMatches};
use owo_colors::OwoColorize;

use commands::Cli;
use handlers::BootstrapHandler;
use pacboot_constants::EXAMPLES;

pub fn run_cli() -> anyhow::Result<()> {
    let matches = Cli::command()
        .after_long_help(examples_help())
        .get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    pacboot_logger::init_logger(cli.quiet);
    BootstrapHandler::handle(&cli)
}

fn examples_help() -> String {
    let width = EXAMPLES.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);
    let mut help = format!("{}\n", "Examples:".bright_magenta().bold());
    for (cmd, desc) in EXAMPLES {
        help.push_str(&format!(
            "  {}  {}\n",
            format!("{cmd:<width$}").bright_cyan(),
            desc.bright_black()
        ));
    }
    help
}
