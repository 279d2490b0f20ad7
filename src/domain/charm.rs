use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// A charm reference such as `local:trusty/my-charm` or `cs:~user/xenial/mysql-42`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharmRef {
    pub schema: String,
    pub user: Option<String>,
    pub series: Option<String>,
    pub name: String,
    pub revision: Option<u32>,
}

impl CharmRef {
    /// Default service name Juju assigns when deploying this charm.
    pub fn service_name(&self) -> &str {
        &self.name
    }
}

impl FromStr for CharmRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| AppError::ParseError {
            what: format!("charm reference '{}'", s),
            details: reason.to_string(),
        };

        let (schema, path) = match s.split_once(':') {
            Some((schema, path)) => (schema, path),
            None => ("cs", s),
        };
        if schema != "cs" && schema != "local" {
            return Err(invalid("schema must be 'cs' or 'local'"));
        }

        let mut segments: Vec<&str> = path.split('/').collect();
        let user = match segments.first() {
            Some(first) if first.starts_with('~') => Some(first.trim_start_matches('~').to_string()),
            _ => None,
        };
        if user.is_some() {
            segments.remove(0);
        }

        let (series, name_part) = match segments.as_slice() {
            [name] => (None, *name),
            [series, name] => (Some(series.to_string()), *name),
            _ => return Err(invalid("expected [series/]name")),
        };

        let (name, revision) = match name_part.rsplit_once('-') {
            Some((base, rev)) if !rev.is_empty() && rev.chars().all(|c| c.is_ascii_digit()) => {
                (base, rev.parse().ok())
            }
            _ => (name_part, None),
        };
        if name.is_empty() {
            return Err(invalid("charm name is empty"));
        }

        Ok(CharmRef { schema: schema.to_string(), user, series, name: name.to_string(), revision })
    }
}

impl fmt::Display for CharmRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.schema)?;
        if let Some(user) = &self.user {
            write!(f, "~{}/", user)?;
        }
        if let Some(series) = &self.series {
            write!(f, "{}/", series)?;
        }
        write!(f, "{}", self.name)?;
        if let Some(revision) = self.revision {
            write!(f, "-{}", revision)?;
        }
        Ok(())
    }
}
