pub mod endpoint;
pub mod transport;

pub use endpoint::RepoEndpoint;
pub use transport::{HttpTransport, Transport};
