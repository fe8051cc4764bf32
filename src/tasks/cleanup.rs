//! TTL Sweep Task
//!
//! Background task that periodically removes expired valuations from the
//! result cache. Expiry is already enforced lazily on read; the sweep exists
//! so keys that are never looked up again cannot accumulate forever.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ValuationCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// # Arguments
/// * `cache` - Shared reference to the valuation cache
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<ValuationCache>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            interval_secs = sweep_interval_secs,
            "starting valuation cache sweep task"
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!(removed, "swept expired valuations");
            } else {
                debug!("sweep found no expired valuations");
            }
        }
    })
}
