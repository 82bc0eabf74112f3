pub mod bootstrap;

pub use bootstrap::BootstrapHandler;
