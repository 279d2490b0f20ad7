use std::path::Path;

use log::LevelFilter;

use crate::domain::{AppError, BootstrapOptions, Environment};
use crate::ports::JujuClient;

/// Body run inside a booted context, handed the client bound to the temporary environment.
pub type BootedBody<'a, C> = dyn FnMut(&C) -> Result<(), AppError> + 'a;

/// Collaborators the entry point wires together.
///
/// Production code uses env_logger, `environments.yaml` and the Juju binary;
/// tests substitute a recording implementation.
pub trait AssessmentRuntime {
    type Client: JujuClient;

    fn configure_logging(&self, level: LevelFilter) -> Result<(), AppError>;

    /// Resolve a named environment from configuration.
    fn environment_from_config(&self, name: &str) -> Result<Environment, AppError>;

    /// Build a client for `env` matching the version of `juju_bin`.
    fn client_by_version(
        &self,
        env: Environment,
        juju_bin: &Path,
        debug: bool,
    ) -> Result<Self::Client, AppError>;

    /// Rebind `client` to the temporary environment, bootstrap it, run
    /// `body`, then collect logs and tear down.
    fn booted_context(
        &self,
        options: &BootstrapOptions,
        client: &mut Self::Client,
        body: &mut BootedBody<'_, Self::Client>,
    ) -> Result<(), AppError>;

    fn assess(&self, client: &Self::Client) -> Result<(), AppError>;
}
