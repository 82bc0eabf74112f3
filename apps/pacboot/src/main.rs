fn main() {
    if let Err(err) = pacboot_cli::run_cli() {
        pacboot_logger::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
