use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::domain::{
    AppError, CommandDialect, Environment, JujuVersion, Status, WaitPolicy, poll_until,
};
use crate::ports::JujuClient;

const BOOTSTRAP_CONSTRAINTS: &str = "mem=2G";

/// [`JujuClient`] that drives the `juju` binary.
#[derive(Debug, Clone)]
pub struct JujuCommandClient {
    env: Environment,
    juju_bin: PathBuf,
    version: JujuVersion,
    debug: bool,
    started_wait: WaitPolicy,
    status_wait: WaitPolicy,
}

impl JujuCommandClient {
    pub fn new(env: Environment, juju_bin: PathBuf, version: JujuVersion, debug: bool) -> Self {
        Self {
            env,
            juju_bin,
            version,
            debug,
            started_wait: WaitPolicy::agents_started(),
            status_wait: WaitPolicy::status_retry(),
        }
    }

    /// Ask `juju_bin` for its version and build a client speaking its dialect.
    pub fn by_version(env: Environment, juju_bin: &Path, debug: bool) -> Result<Self, AppError> {
        let output = Command::new(juju_bin).arg("--version").output().map_err(|e| {
            AppError::juju_error(format!("{} --version", juju_bin.display()), e.to_string())
        })?;
        if !output.status.success() {
            return Err(AppError::juju_error(
                format!("{} --version", juju_bin.display()),
                stderr_details(&output),
            ));
        }

        let version = JujuVersion::parse(&String::from_utf8_lossy(&output.stdout))?;
        log::info!("Using juju {} at {}", version, juju_bin.display());
        Ok(Self::new(env, juju_bin.to_path_buf(), version, debug))
    }

    fn dialect(&self) -> CommandDialect {
        self.version.dialect()
    }

    /// `(--show-log|--debug) <command> <env-flag> <env> <args...>`
    fn full_args(&self, command: &str, args: &[&str]) -> Vec<String> {
        let mut full = self.global_args(command);
        full.push(self.dialect().env_flag().to_string());
        full.push(self.env.name().to_string());
        full.extend(args.iter().map(|a| a.to_string()));
        full
    }

    fn global_args(&self, command: &str) -> Vec<String> {
        let log_flag = if self.debug { "--debug" } else { "--show-log" };
        vec![log_flag.to_string(), command.to_string()]
    }

    fn run(&self, args: &[String]) -> Result<Output, AppError> {
        let rendered = format!("juju {}", args.join(" "));
        log::debug!("Running: {}", rendered);

        let mut command = Command::new(&self.juju_bin);
        command.args(args);
        if let Some(home) = self.env.juju_home() {
            command.env(self.dialect().home_variable(), home);
        }

        let output =
            command.output().map_err(|e| AppError::juju_error(&rendered, e.to_string()))?;
        if !output.status.success() {
            return Err(AppError::juju_error(rendered, stderr_details(&output)));
        }
        Ok(output)
    }

    fn bootstrap_args(&self, upload_tools: bool) -> Vec<String> {
        let mut args = match self.dialect() {
            CommandDialect::Environment => self.full_args("bootstrap", &[]),
            CommandDialect::Model => {
                let mut args = self.global_args("bootstrap");
                args.push(self.env.name().to_string());
                args.push(self.env.provider().unwrap_or("localhost").to_string());
                args
            }
        };
        args.push("--constraints".into());
        args.push(BOOTSTRAP_CONSTRAINTS.into());
        if upload_tools {
            args.push("--upload-tools".into());
        }
        args
    }

    fn destroy_args(&self) -> Vec<String> {
        let name = self.env.name();
        let tail: &[&str] = match self.dialect() {
            CommandDialect::Environment => &["--force", "-y"],
            CommandDialect::Model => &["-y"],
        };
        let command = match self.dialect() {
            CommandDialect::Environment => "destroy-environment",
            CommandDialect::Model => "kill-controller",
        };

        let mut args = self.global_args(command);
        args.push(name.to_string());
        args.extend(tail.iter().map(|a| a.to_string()));
        args
    }
}

fn stderr_details(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("exited with {}", output.status)
    } else {
        stderr
    }
}

impl JujuClient for JujuCommandClient {
    fn env(&self) -> &Environment {
        &self.env
    }

    fn rebind(&mut self, env: Environment) {
        self.env = env;
    }

    fn bootstrap(&self, upload_tools: bool) -> Result<(), AppError> {
        log::info!("Bootstrapping {}", self.env.name());
        self.run(&self.bootstrap_args(upload_tools))?;
        Ok(())
    }

    fn juju(&self, command: &str, args: &[&str]) -> Result<(), AppError> {
        self.run(&self.full_args(command, args))?;
        Ok(())
    }

    fn get_juju_output(&self, command: &str, args: &[&str]) -> Result<String, AppError> {
        let output = self.run(&self.full_args(command, args))?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn get_status(&self) -> Result<Status, AppError> {
        let text = poll_until(self.status_wait, "juju status", || {
            match self.get_juju_output("status", &["--format", "yaml"]) {
                Ok(text) => Ok(Some(text)),
                Err(AppError::JujuError { details, .. }) => {
                    log::debug!("juju status failed, retrying: {}", details);
                    Ok(None)
                }
                Err(err) => Err(err),
            }
        })?;
        Status::from_yaml(&text)
    }

    fn wait_for_started(&self) -> Result<Status, AppError> {
        let status = poll_until(self.started_wait, "agents to start", || {
            let status = self.get_status()?;
            if status.check_agents_started()? {
                return Ok(Some(status));
            }
            for (state, agents) in status.agent_states() {
                log::info!("{}: {}", state, agents.join(", "));
            }
            Ok(None)
        })?;
        log::info!("All agents started in {}", self.env.name());
        Ok(status)
    }

    fn destroy_environment(&self) -> Result<(), AppError> {
        log::info!("Destroying {}", self.env.name());
        self.run(&self.destroy_args())?;
        Ok(())
    }
}
