use std::fmt;

use crate::domain::AppError;

/// Version reported by `juju --version`, e.g. `1.25.6-trusty-amd64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JujuVersion {
    pub major: u32,
    pub minor: u32,
    pub raw: String,
}

/// Command-line conventions that changed between Juju 1.x and 2.x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandDialect {
    /// Juju 1.x: `-e <env>`, `destroy-environment`.
    Environment,
    /// Juju 2.x and later: `-m <model>`, `kill-controller`.
    Model,
}

impl JujuVersion {
    pub fn parse(output: &str) -> Result<Self, AppError> {
        let raw = output.trim();
        let invalid = || AppError::ParseError {
            what: "juju version".into(),
            details: format!("unrecognized version string '{}'", raw),
        };

        let number = raw.split('-').next().ok_or_else(invalid)?;
        let mut parts = number.split('.');
        let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let minor = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;

        Ok(Self { major, minor, raw: raw.to_string() })
    }

    pub fn dialect(&self) -> CommandDialect {
        if self.major < 2 { CommandDialect::Environment } else { CommandDialect::Model }
    }
}

impl fmt::Display for JujuVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl CommandDialect {
    pub fn env_flag(self) -> &'static str {
        match self {
            CommandDialect::Environment => "-e",
            CommandDialect::Model => "-m",
        }
    }

    /// Variable naming the directory juju keeps client state in.
    pub fn home_variable(self) -> &'static str {
        match self {
            CommandDialect::Environment => "JUJU_HOME",
            CommandDialect::Model => "JUJU_DATA",
        }
    }
}
