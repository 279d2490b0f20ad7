//! Bootstrap/teardown bracket around an assessment.

use std::fs;

use crate::adapters::EnvironmentsFile;
use crate::domain::{AppError, BootstrapOptions};
use crate::ports::{BootedBody, JujuClient};

/// File in the log directory receiving the final status snapshot.
pub const STATUS_SNAPSHOT: &str = "status.yaml";

pub struct BootstrapManager<'a, C: JujuClient> {
    client: &'a C,
    options: &'a BootstrapOptions,
}

impl<'a, C: JujuClient> BootstrapManager<'a, C> {
    /// Rebind `client` to `options.temp_env_name`, with its own Juju home
    /// under the original one.
    pub fn new(client: &'a mut C, options: &'a BootstrapOptions) -> Self {
        let temp_env = client.env().renamed(&options.temp_env_name);
        log::debug!("Using temporary environment {} for {}", temp_env.name(), client.env().name());
        client.rebind(temp_env);
        Self { client, options }
    }

    /// Bootstrap, run `body`, then dump logs and tear down.
    ///
    /// Teardown runs whether or not `body` succeeds. An error from `body`
    /// takes precedence over one from teardown.
    pub fn booted_context(&self, body: &mut BootedBody<'_, C>) -> Result<(), AppError> {
        fs::create_dir_all(&self.options.log_dir)?;
        self.prepare_juju_home()?;

        if let Err(err) = self.client.bootstrap(self.options.upload_tools) {
            log::error!("Bootstrap of {} failed: {}", self.env_name(), err);
            if let Err(teardown) = self.tear_down() {
                log::warn!("Teardown after failed bootstrap also failed: {}", teardown);
            }
            return Err(err);
        }

        let result = body(self.client);
        if let Err(err) = &result {
            log::error!("Assessment failed: {}", err);
        }

        self.dump_logs();
        let teardown = self.tear_down();

        match (result, teardown) {
            (Err(err), Err(teardown)) => {
                log::warn!("Teardown failed: {}", teardown);
                Err(err)
            }
            (Err(err), Ok(())) => Err(err),
            (Ok(()), teardown) => teardown,
        }
    }

    fn env_name(&self) -> &str {
        self.client.env().name()
    }

    /// Write the temporary environment's definition into its own Juju home.
    fn prepare_juju_home(&self) -> Result<(), AppError> {
        let env = self.client.env();
        let Some(home) = env.juju_home() else {
            return Ok(());
        };
        let env = env.clone().with_overrides(self.options.config_overrides());
        EnvironmentsFile::in_home(home).write_environment(&env)
    }

    fn dump_logs(&self) {
        let path = self.options.log_dir.join(STATUS_SNAPSHOT);
        let written = self
            .client
            .get_status()
            .and_then(|status| status.to_yaml())
            .and_then(|yaml| fs::write(&path, yaml).map_err(AppError::from));
        match written {
            Ok(()) => log::info!("Saved status of {} to {}", self.env_name(), path.display()),
            Err(err) => log::warn!("Could not save status of {}: {}", self.env_name(), err),
        }
    }

    fn tear_down(&self) -> Result<(), AppError> {
        if self.options.keep_env {
            log::info!("Keeping environment {}", self.env_name());
            return Ok(());
        }
        self.client.destroy_environment()
    }
}
