//! `environments.yaml` reader and writer.

use std::collections::BTreeMap;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Environment, EnvironmentConfig};

pub const ENVIRONMENTS_FILE_NAME: &str = "environments.yaml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct EnvironmentsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    #[serde(default)]
    environments: BTreeMap<String, EnvironmentConfig>,
}

/// Environment definitions stored under a Juju home.
#[derive(Debug, Clone)]
pub struct EnvironmentsFile {
    path: PathBuf,
}

impl EnvironmentsFile {
    pub fn in_home(juju_home: &Path) -> Self {
        Self { path: juju_home.join(ENVIRONMENTS_FILE_NAME) }
    }

    /// Locate the file via `JUJU_HOME`, falling back to `$HOME/.juju`.
    pub fn discover() -> Result<Self, AppError> {
        let home = resolve_juju_home(env::var_os("JUJU_HOME"), env::var_os("HOME"))
            .ok_or_else(|| AppError::config_error("Neither JUJU_HOME nor HOME is set"))?;
        Ok(Self::in_home(&home))
    }

    fn juju_home(&self) -> PathBuf {
        self.path.parent().map(Path::to_path_buf).unwrap_or_default()
    }

    /// Load the environment called `name`, bound to this file's Juju home.
    pub fn load(&self, name: &str) -> Result<Environment, AppError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::config_error(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let mut document: EnvironmentsDocument =
            serde_yaml::from_str(&content).map_err(|e| AppError::ParseError {
                what: self.path.display().to_string(),
                details: e.to_string(),
            })?;

        let config = document.environments.remove(name).ok_or_else(|| {
            AppError::EnvironmentNotFound {
                name: name.to_string(),
                path: self.path.display().to_string(),
            }
        })?;

        log::debug!("Loaded environment '{}' from {}", name, self.path.display());
        Ok(Environment::new(name, config).with_juju_home(self.juju_home()))
    }

    /// Write a file holding only `env`, which also becomes the default.
    pub fn write_environment(&self, env: &Environment) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut environments = BTreeMap::new();
        environments.insert(env.name().to_string(), env.config().clone());
        let document = EnvironmentsDocument { default: Some(env.name().to_string()), environments };

        let content = serde_yaml::to_string(&document).map_err(|e| AppError::ParseError {
            what: "environments document".into(),
            details: e.to_string(),
        })?;
        fs::write(&self.path, content)?;
        log::debug!("Wrote environment '{}' to {}", env.name(), self.path.display());
        Ok(())
    }
}

fn resolve_juju_home(juju_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    juju_home
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| PathBuf::from(h).join(".juju")))
}
