//! CLI Adapter.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::app::logging;
use crate::app::runtime::SystemRuntime;
use crate::domain::{AppError, BootstrapOptions};
use crate::ports::AssessmentRuntime;

pub const BIN_NAME: &str = "assess-perf-test-simple";

#[derive(Debug, Clone, Parser)]
#[command(name = BIN_NAME)]
#[command(version)]
#[command(
    about = "Deploy a local charm into a temporary Juju environment and wait for it to start",
    long_about = None
)]
pub struct AssessArgs {
    /// Juju environment the temporary environment is based on
    pub env: String,
    /// Path to the juju binary
    pub juju_bin: PathBuf,
    /// Directory receiving logs and the final status snapshot
    pub logs: PathBuf,
    /// Name of the temporary environment to bootstrap
    pub temp_env_name: String,
    /// Log at DEBUG level
    #[arg(short, long)]
    pub verbose: bool,
    /// Run juju with --debug
    #[arg(long)]
    pub debug: bool,
    /// Default series for the temporary environment
    #[arg(long)]
    pub series: Option<String>,
    /// URL for retrieving agent binaries
    #[arg(long)]
    pub agent_url: Option<String>,
    /// Stream for retrieving agent binaries
    #[arg(long)]
    pub agent_stream: Option<String>,
    /// Upload local agent binaries during bootstrap
    #[arg(long)]
    pub upload_tools: bool,
    /// Leave the temporary environment running afterwards
    #[arg(long)]
    pub keep_env: bool,
}

impl AssessArgs {
    pub fn bootstrap_options(&self) -> BootstrapOptions {
        BootstrapOptions {
            temp_env_name: self.temp_env_name.clone(),
            log_dir: self.logs.clone(),
            keep_env: self.keep_env,
            upload_tools: self.upload_tools,
            series: self.series.clone(),
            agent_url: self.agent_url.clone(),
            agent_stream: self.agent_stream.clone(),
        }
    }
}

/// Parse `argv`, which excludes the program name.
pub fn parse_args<I, T>(argv: I) -> Result<AssessArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let full = std::iter::once(OsString::from(BIN_NAME)).chain(argv.into_iter().map(Into::into));
    AssessArgs::try_parse_from(full)
}

/// Parse `argv` and run the assessment with `runtime`.
///
/// Parse failures and `--help` exit the process the way clap does.
pub fn main<R, I, T>(argv: I, runtime: &R) -> Result<(), AppError>
where
    R: AssessmentRuntime,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = parse_args(argv).unwrap_or_else(|e| e.exit());
    run_with(runtime, &args)
}

pub fn run_with<R: AssessmentRuntime>(runtime: &R, args: &AssessArgs) -> Result<(), AppError> {
    runtime.configure_logging(logging::level_for(args.verbose))?;
    let env = runtime.environment_from_config(&args.env)?;
    let mut client = runtime.client_by_version(env, &args.juju_bin, args.debug)?;
    runtime.booted_context(&args.bootstrap_options(), &mut client, &mut |client: &R::Client| {
        runtime.assess(client)
    })
}

/// Entry point for the CLI.
pub fn run() {
    if let Err(e) = main(std::env::args_os().skip(1), &SystemRuntime) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
