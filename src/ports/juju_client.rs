use crate::domain::{AppError, Environment, Status};

/// Capabilities an assessment needs from a Juju client bound to one environment.
pub trait JujuClient {
    /// Environment this client operates on.
    fn env(&self) -> &Environment;

    /// Point the client at a different environment.
    fn rebind(&mut self, env: Environment);

    /// Bootstrap the environment, optionally uploading local agent binaries.
    fn bootstrap(&self, upload_tools: bool) -> Result<(), AppError>;

    /// Run `command` with `args` against the environment.
    fn juju(&self, command: &str, args: &[&str]) -> Result<(), AppError>;

    /// Run `command` with `args` and return its standard output.
    fn get_juju_output(&self, command: &str, args: &[&str]) -> Result<String, AppError>;

    /// Current status of the environment.
    fn get_status(&self) -> Result<Status, AppError>;

    /// Block until every machine and unit agent reports `started`.
    fn wait_for_started(&self) -> Result<Status, AppError>;

    /// Tear the environment down.
    fn destroy_environment(&self) -> Result<(), AppError>;

    /// Deploy a charm; routed through [`JujuClient::juju`].
    fn deploy(&self, charm: &str) -> Result<(), AppError> {
        self.juju("deploy", &[charm])
    }
}
