use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::LevelFilter;

use crate::domain::{AppError, BootstrapOptions, Environment, EnvironmentConfig};
use crate::ports::{AssessmentRuntime, BootedBody, JujuClient};
use crate::testing::FakeJujuClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCall {
    ConfigureLogging(LevelFilter),
    EnvironmentFromConfig(String),
    ClientByVersion { env_name: String, juju_bin: PathBuf, debug: bool },
    BootedContext { temp_env_name: String },
    Assess { env_name: String },
}

/// Runtime spy: records each collaborator call and hands out fake clients.
///
/// `booted_context` runs the body without renaming or bootstrapping anything.
pub struct RecordingRuntime {
    calls: Mutex<Vec<RuntimeCall>>,
    known_environment: bool,
}

impl RecordingRuntime {
    pub fn new() -> Self {
        Self { calls: Mutex::new(Vec::new()), known_environment: true }
    }

    pub fn failing_environment() -> Self {
        Self { known_environment: false, ..Self::new() }
    }

    pub fn calls(&self) -> Vec<RuntimeCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RuntimeCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for RecordingRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentRuntime for RecordingRuntime {
    type Client = FakeJujuClient;

    fn configure_logging(&self, level: LevelFilter) -> Result<(), AppError> {
        self.record(RuntimeCall::ConfigureLogging(level));
        Ok(())
    }

    fn environment_from_config(&self, name: &str) -> Result<Environment, AppError> {
        self.record(RuntimeCall::EnvironmentFromConfig(name.to_string()));
        if !self.known_environment {
            return Err(AppError::EnvironmentNotFound {
                name: name.to_string(),
                path: "environments.yaml".into(),
            });
        }
        Ok(Environment::new(name, EnvironmentConfig::new()))
    }

    fn client_by_version(
        &self,
        env: Environment,
        juju_bin: &Path,
        debug: bool,
    ) -> Result<Self::Client, AppError> {
        self.record(RuntimeCall::ClientByVersion {
            env_name: env.name().to_string(),
            juju_bin: juju_bin.to_path_buf(),
            debug,
        });
        Ok(FakeJujuClient::with_env(env))
    }

    fn booted_context(
        &self,
        options: &BootstrapOptions,
        client: &mut Self::Client,
        body: &mut BootedBody<'_, Self::Client>,
    ) -> Result<(), AppError> {
        self.record(RuntimeCall::BootedContext { temp_env_name: options.temp_env_name.clone() });
        body(client)
    }

    fn assess(&self, client: &Self::Client) -> Result<(), AppError> {
        self.record(RuntimeCall::Assess { env_name: client.env().name().to_string() });
        Ok(())
    }
}
