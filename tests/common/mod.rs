//! Shared testing utilities for assess-perf-test-simple CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENVIRONMENTS: &str = r#"
default: an-env
environments:
  an-env:
    type: ec2
    region: us-east-1
"#;

/// `juju status` output as `(before deploy, added by deploy)` for Juju 1.x.
const STATUS_ONE: (&str, &str) = (
    r#"machines:
  "0":
    agent-state: started
"#,
    r#"  "1":
    agent-state: started
services:
  my-charm:
    charm: local:trusty/my-charm-0
    units:
      my-charm/0:
        agent-state: started
        machine: "1"
"#,
);

/// Juju 2.x shape: `juju-status.current`, `applications`, settled units report idle.
const STATUS_TWO: (&str, &str) = (
    r#"model:
  name: an-env-mod
machines:
  "0":
    juju-status:
      current: started
"#,
    r#"  "1":
    juju-status:
      current: started
applications:
  my-charm:
    charm: local:xenial/my-charm-0
    units:
      my-charm/0:
        workload-status:
          current: unknown
        juju-status:
          current: idle
        machine: "1"
"#,
);

/// Isolated environment with a Juju home and a fake `juju` binary.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    juju_home: PathBuf,
    juju_bin: PathBuf,
    log_file: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        Self::with_version("1.25.6-trusty-amd64")
    }

    /// Create an environment whose fake juju reports `version`.
    pub fn with_version(version: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let juju_home = root.path().join("juju");
        fs::create_dir_all(&juju_home).expect("Failed to create juju home");
        fs::write(juju_home.join("environments.yaml"), ENVIRONMENTS)
            .expect("Failed to write environments.yaml");

        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("juju.log");
        let state_dir = root.path().join("state");
        fs::create_dir_all(&state_dir).expect("Failed to create state dir");
        let juju_bin = bin_dir.join("juju");

        let juju_one = version.starts_with("1.");
        let home_var = if juju_one { "JUJU_HOME" } else { "JUJU_DATA" };
        let (controller, deployed) = if juju_one { STATUS_ONE } else { STATUS_TWO };

        let script = format!(
            r#"#!/bin/sh
LOG="{log}"
STATE="{state}"

if [ "$1" = "--version" ]; then
    echo "{version}"
    exit 0
fi

echo "{home_var}=${home_var} $*" >> "$LOG"

case "$2" in
    bootstrap)
        touch "$STATE/bootstrapped"
        ;;
    deploy)
        if [ ! -f "$STATE/bootstrapped" ]; then
            echo "environment is not bootstrapped" >&2
            exit 1
        fi
        if [ -n "$FAKE_JUJU_FAIL_DEPLOY" ]; then
            echo "cannot deploy: charm not found" >&2
            exit 1
        fi
        touch "$STATE/deployed"
        ;;
    status)
        cat <<'STATUS'
{controller}STATUS
        if [ -f "$STATE/deployed" ]; then
            cat <<'STATUS'
{deployed}STATUS
        fi
        ;;
    destroy-environment|kill-controller)
        rm -f "$STATE/bootstrapped" "$STATE/deployed"
        ;;
esac

exit 0
"#,
            log = log_file.display(),
            state = state_dir.display(),
            version = version,
            home_var = home_var,
            controller = controller,
            deployed = deployed,
        );
        fs::write(&juju_bin, script).expect("Failed to write fake juju");
        let mut perms = fs::metadata(&juju_bin).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&juju_bin, perms).expect("Failed to set permissions");

        Self { root, juju_home, juju_bin, log_file }
    }

    pub fn juju_home(&self) -> &Path {
        &self.juju_home
    }

    pub fn juju_bin(&self) -> &Path {
        &self.juju_bin
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.path().join("logs")
    }

    /// Lines the fake juju appended for every non-version invocation, each
    /// prefixed with `JUJU_HOME=` (1.x) or `JUJU_DATA=` (2.x) and its value.
    pub fn juju_log(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Build a command for invoking the compiled binary with `JUJU_HOME` set.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("assess-perf-test-simple")
            .expect("Failed to locate assess-perf-test-simple binary");
        cmd.env("JUJU_HOME", &self.juju_home).env_remove("FAKE_JUJU_FAIL_DEPLOY");
        cmd
    }

    /// Command with the four positional arguments already applied.
    pub fn assess(&self, env: &str, temp_env_name: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg(env).arg(&self.juju_bin).arg(self.logs_dir()).arg(temp_env_name);
        cmd
    }
}
