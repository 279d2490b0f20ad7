mod assessment_runtime;
mod juju_client;

pub use assessment_runtime::{AssessmentRuntime, BootedBody};
pub use juju_client::JujuClient;
