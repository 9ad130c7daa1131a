//! TTL Cleanup Task
//!
//! Background task that periodically removes expired secrets from the cache.
//! Reads enforce expiry on their own; the sweep only releases memory held by
//! entries nobody asks for again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SecretCache;

/// Spawns a task that sweeps expired entries every `cleanup_interval_secs`.
///
/// Returns the task handle so shutdown can abort it.
pub fn spawn_cleanup_task(cache: Arc<SecretCache>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;
            if removed > 0 {
                info!("TTL cleanup: removed {} expired secrets", removed);
            } else {
                debug!("TTL cleanup: no expired secrets found");
            }
        }
    })
}
