use std::path::Path;

use log::LevelFilter;

use crate::adapters::{EnvironmentsFile, JujuCommandClient};
use crate::app::bootstrap_manager::BootstrapManager;
use crate::app::commands::assess::assess_perf_test_simple;
use crate::app::logging;
use crate::domain::{AppError, BootstrapOptions, Environment};
use crate::ports::{AssessmentRuntime, BootedBody};

/// Runtime backed by env_logger, `environments.yaml` and the Juju binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRuntime;

impl AssessmentRuntime for SystemRuntime {
    type Client = JujuCommandClient;

    fn configure_logging(&self, level: LevelFilter) -> Result<(), AppError> {
        logging::configure_logging(level)
    }

    fn environment_from_config(&self, name: &str) -> Result<Environment, AppError> {
        EnvironmentsFile::discover()?.load(name)
    }

    fn client_by_version(
        &self,
        env: Environment,
        juju_bin: &Path,
        debug: bool,
    ) -> Result<Self::Client, AppError> {
        JujuCommandClient::by_version(env, juju_bin, debug)
    }

    fn booted_context(
        &self,
        options: &BootstrapOptions,
        client: &mut Self::Client,
        body: &mut BootedBody<'_, Self::Client>,
    ) -> Result<(), AppError> {
        BootstrapManager::new(client, options).booted_context(body)
    }

    fn assess(&self, client: &Self::Client) -> Result<(), AppError> {
        assess_perf_test_simple(client)
    }
}
