pub mod index;
pub mod parser;
pub mod record;
pub mod resolver;
pub mod version;

pub use index::PackageIndex;
pub use parser::{IgnoreList, IndexParser};
pub use record::PackageRecord;
pub use resolver::{ResolutionPlan, resolve};
pub use version::VersionOrder;
