//! Remote hosting-service registry and existence probing.

pub mod probe;
pub mod registry;

pub use probe::{HttpProber, RepositoryProbe};
pub use registry::{REMOTE_SERVICES, RemoteService};
