use std::{sync::Arc, time::Duration};
use tokio::time::interval;

use crate::{constants::*, state::AppState, utils::get_epoch_ms};

/// This function periodically deletes expired OTP records from the store.
/// Expired records are also deleted lazily on verification, the job only
/// reclaims memory for codes that were never verified.
pub async fn cleanup_job(state: Arc<AppState>) {
    tracing::debug!("initializing cleanup scheduler job");
    // CLEANUP_JOB_INTERVAL is mentioned in seconds
    let mut interval = interval(Duration::from_secs(CLEANUP_JOB_INTERVAL));
    loop {
        interval.tick().await;
        let removed = state.otp_store.sweep_expired(get_epoch_ms()).await;
        if removed > 0 {
            tracing::debug!("cleanup job removed {removed} expired otp records");
        }
    }
}
