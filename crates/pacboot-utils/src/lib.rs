pub mod path_utils;
pub mod text_utils;

pub use path_utils::*;
pub use text_utils::*;
