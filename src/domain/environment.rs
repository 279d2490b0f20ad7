//! Named Juju environment and its configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

/// Configuration mapping for a single environment, as found in `environments.yaml`.
pub type EnvironmentConfig = BTreeMap<String, Value>;

/// Directory under a Juju home that holds per-environment temporary homes.
pub const TEMP_HOMES_DIR: &str = "juju-homes";

/// A named deployment target with its provider configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    name: String,
    config: EnvironmentConfig,
    juju_home: Option<PathBuf>,
}

impl Environment {
    pub fn new<S: Into<String>>(name: S, config: EnvironmentConfig) -> Self {
        Self { name: name.into(), config, juju_home: None }
    }

    /// Bind the environment to the Juju home it was loaded from.
    pub fn with_juju_home(mut self, juju_home: PathBuf) -> Self {
        self.juju_home = Some(juju_home);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn juju_home(&self) -> Option<&Path> {
        self.juju_home.as_deref()
    }

    /// Provider type (`type:` key), e.g. `ec2`, `local`, `maas`.
    pub fn provider(&self) -> Option<&str> {
        self.config_str("type")
    }

    pub fn config_str(&self, key: &str) -> Option<&str> {
        self.config.get(key).and_then(Value::as_str)
    }

    /// Copy of this environment under a new name, living in its own Juju home.
    ///
    /// The temporary home is `<home>/juju-homes/<name>`, so bootstrapping the
    /// copy never touches state belonging to the original environment.
    pub fn renamed(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            config: self.config.clone(),
            juju_home: self.juju_home.as_ref().map(|home| home.join(TEMP_HOMES_DIR).join(name)),
        }
    }

    /// Apply config overrides, replacing existing keys.
    pub fn with_overrides(mut self, overrides: EnvironmentConfig) -> Self {
        self.config.extend(overrides);
        self
    }
}
