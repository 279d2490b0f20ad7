use std::path::PathBuf;

use serde_yaml::Value;

use crate::domain::environment::EnvironmentConfig;

/// Settings that shape the bootstrap/teardown bracket around an assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapOptions {
    /// Name of the temporary environment.
    pub temp_env_name: String,
    /// Directory receiving logs and the final status snapshot.
    pub log_dir: PathBuf,
    /// Leave the environment running after the assessment.
    pub keep_env: bool,
    /// Upload locally built agent binaries.
    pub upload_tools: bool,
    pub series: Option<String>,
    pub agent_url: Option<String>,
    pub agent_stream: Option<String>,
}

impl BootstrapOptions {
    /// Environment config keys the options override in the temporary home.
    pub fn config_overrides(&self) -> EnvironmentConfig {
        let mut overrides = EnvironmentConfig::new();
        let pairs = [
            ("default-series", &self.series),
            ("agent-metadata-url", &self.agent_url),
            ("agent-stream", &self.agent_stream),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                overrides.insert(key.to_string(), Value::from(value.as_str()));
            }
        }
        overrides
    }
}
