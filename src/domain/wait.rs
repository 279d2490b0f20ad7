use std::thread;
use std::time::{Duration, Instant};

use crate::domain::AppError;

/// Deadline and poll interval for a blocking wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub interval: Duration,
}

impl WaitPolicy {
    pub const fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    /// Agents can take a long time to come up on real clouds.
    pub const fn agents_started() -> Self {
        Self::new(Duration::from_secs(1200), Duration::from_secs(5))
    }

    pub const fn status_retry() -> Self {
        Self::new(Duration::from_secs(60), Duration::from_secs(2))
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::agents_started()
    }
}

/// Call `check` until it yields a value or the policy's deadline passes.
///
/// The check always runs at least once. Errors from the check end the wait
/// immediately.
pub fn poll_until<T, F>(policy: WaitPolicy, what: &str, mut check: F) -> Result<T, AppError>
where
    F: FnMut() -> Result<Option<T>, AppError>,
{
    let start = Instant::now();
    loop {
        if let Some(value) = check()? {
            return Ok(value);
        }
        if start.elapsed() >= policy.timeout {
            return Err(AppError::Timeout {
                what: what.to_string(),
                seconds: policy.timeout.as_secs(),
            });
        }
        thread::sleep(policy.interval);
    }
}
