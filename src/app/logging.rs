use std::fmt::Display;
use std::io::Write;

use chrono::Local;
use log::LevelFilter;

use crate::domain::AppError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Level used when `--verbose` is absent.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { DEFAULT_LEVEL }
}

/// Install the process-wide logger writing timestamped lines to stderr.
pub fn configure_logging(level: LevelFilter) -> Result<(), AppError> {
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(buf, "{}", format_line(&Local::now(), record.level(), record.args()))
        })
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn format_line(
    timestamp: &chrono::DateTime<Local>,
    level: log::Level,
    message: impl Display,
) -> String {
    format!("{} {} {}", timestamp.format(TIMESTAMP_FORMAT), level, message)
}
