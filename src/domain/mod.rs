pub mod bootstrap;
pub mod charm;
pub mod environment;
pub mod error;
pub mod juju_version;
pub mod status;
pub mod wait;

pub use bootstrap::BootstrapOptions;
pub use charm::CharmRef;
pub use environment::{Environment, EnvironmentConfig};
pub use error::AppError;
pub use juju_version::{CommandDialect, JujuVersion};
pub use status::Status;
pub use wait::{WaitPolicy, poll_until};
