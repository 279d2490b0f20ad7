//! Parsed `juju status --format yaml` output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Agent state every machine and unit must reach for a deployment to be settled.
pub const STARTED: &str = "started";

/// Juju 2.x reports a settled unit agent as idle rather than started.
pub const IDLE: &str = "idle";

const NO_AGENT: &str = "no-agent";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default)]
    pub machines: BTreeMap<String, MachineStatus>,
    #[serde(default, alias = "applications")]
    pub services: BTreeMap<String, ServiceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineStatus {
    #[serde(rename = "agent-state", default, skip_serializing_if = "Option::is_none")]
    pub agent_state: Option<String>,
    #[serde(rename = "juju-status", default, skip_serializing_if = "Option::is_none")]
    pub juju_status: Option<AgentStatus>,
    #[serde(rename = "dns-name", default, skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charm: Option<String>,
    #[serde(default)]
    pub units: BTreeMap<String, UnitStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitStatus {
    #[serde(rename = "agent-state", default, skip_serializing_if = "Option::is_none")]
    pub agent_state: Option<String>,
    #[serde(rename = "juju-status", default, skip_serializing_if = "Option::is_none")]
    pub juju_status: Option<AgentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub subordinates: BTreeMap<String, UnitStatus>,
}

/// Juju 2.x `juju-status` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
}

impl MachineStatus {
    /// `agent-state` on 1.x, `juju-status.current` on 2.x.
    pub fn state(&self) -> Option<&str> {
        self.agent_state.as_deref().or_else(|| current(&self.juju_status))
    }
}

impl UnitStatus {
    pub fn state(&self) -> Option<&str> {
        self.agent_state.as_deref().or_else(|| current(&self.juju_status))
    }
}

fn current(status: &Option<AgentStatus>) -> Option<&str> {
    status.as_ref().and_then(|s| s.current.as_deref())
}

impl Status {
    pub fn from_yaml(text: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(text).map_err(|e| AppError::ParseError {
            what: "juju status output".into(),
            details: e.to_string(),
        })
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|e| AppError::ParseError {
            what: "status snapshot".into(),
            details: e.to_string(),
        })
    }

    /// Number of principal units deployed for `service`; zero when absent.
    pub fn get_service_unit_count(&self, service: &str) -> usize {
        self.services.get(service).map_or(0, |s| s.units.len())
    }

    /// All units, subordinates included, as `(name, status)` pairs.
    pub fn iter_units(&self) -> Vec<(&str, &UnitStatus)> {
        fn collect<'a>(
            units: &'a BTreeMap<String, UnitStatus>,
            out: &mut Vec<(&'a str, &'a UnitStatus)>,
        ) {
            for (name, unit) in units {
                out.push((name.as_str(), unit));
                collect(&unit.subordinates, out);
            }
        }

        let mut out = Vec::new();
        for service in self.services.values() {
            collect(&service.units, &mut out);
        }
        out
    }

    /// Group agent names by their reported state.
    pub fn agent_states(&self) -> BTreeMap<String, Vec<String>> {
        let mut states: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (id, machine) in &self.machines {
            let state = machine.state().unwrap_or(NO_AGENT);
            states.entry(state.to_string()).or_default().push(id.clone());
        }
        for (name, unit) in self.iter_units() {
            let state = unit.state().unwrap_or(NO_AGENT);
            states.entry(state.to_string()).or_default().push(name.to_string());
        }
        states
    }

    /// True once every agent is started (or idle); fails fast on any error state.
    pub fn check_agents_started(&self) -> Result<bool, AppError> {
        let states = self.agent_states();
        for (state, agents) in &states {
            if state.contains("error") {
                return Err(AppError::AgentError {
                    agent: agents.join(", "),
                    state: state.clone(),
                });
            }
        }
        Ok(states.keys().all(|state| state == STARTED || state == IDLE))
    }
}
