pub mod extractor;
pub mod path_resolver;

pub use extractor::{ArchiveExtractor, ArchiveFormat};
pub use path_resolver::PathResolver;
