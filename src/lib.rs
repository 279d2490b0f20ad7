//! assess-perf-test-simple: deploy a local charm into a temporary Juju environment
//! and verify that it starts.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::SystemRuntime;
pub use app::cli::{AssessArgs, main, parse_args, run_with};
pub use app::commands::assess::{TEST_CHARM, assess_perf_test_simple};
pub use domain::AppError;
pub use ports::{AssessmentRuntime, JujuClient};
