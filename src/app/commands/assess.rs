//! The assessment itself: deploy one local charm and wait for it to start.

use crate::domain::{AppError, CharmRef};
use crate::ports::JujuClient;

/// Charm deployed by the assessment.
pub const TEST_CHARM: &str = "local:trusty/my-charm";

/// Deploy [`TEST_CHARM`] and block until its agents report started.
///
/// Verification of the resulting status is left to the caller. Client errors
/// propagate unchanged.
pub fn assess_perf_test_simple<C: JujuClient + ?Sized>(client: &C) -> Result<(), AppError> {
    let charm: CharmRef = TEST_CHARM.parse()?;
    log::info!("Deploying {} to {}", charm, client.env().name());
    client.deploy(TEST_CHARM)?;
    client.wait_for_started()?;
    log::info!("Service {} started", charm.service_name());
    Ok(())
}
