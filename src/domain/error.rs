use std::io;

use thiserror::Error;

/// Library-wide error type for assessment operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Named environment is missing from environments.yaml.
    #[error("Environment '{name}' not found in {path}")]
    EnvironmentNotFound { name: String, path: String },

    /// Juju execution failed.
    #[error("Juju error running '{command}': {details}")]
    JujuError { command: String, details: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// A polled condition did not hold before the deadline.
    #[error("Timed out waiting for {what} after {seconds}s")]
    Timeout { what: String, seconds: u64 },

    /// A machine or unit agent reported an error state.
    #[error("Agent '{agent}' is in error state '{state}'")]
    AgentError { agent: String, state: String },

    /// Operation requires a bootstrapped environment.
    #[error("Environment '{0}' is not bootstrapped")]
    NotBootstrapped(String),

    /// Logger installation failed.
    #[error("Failed to configure logging: {0}")]
    Logging(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn juju_error<C: Into<String>, D: Into<String>>(command: C, details: D) -> Self {
        AppError::JujuError { command: command.into(), details: details.into() }
    }
}
