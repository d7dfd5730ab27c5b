//! Expiration Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Lazy expiration on read already guarantees an expired entry is never
//! served; the sweep additionally reclaims entries nobody reads anymore.

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::strategy::CacheHandle;

/// Spawns a background task that periodically sweeps expired entries
/// from the handle's partition.
///
/// The cadence is the partition's configured `sweep_interval`. The task
/// runs until aborted; abort the returned handle during shutdown.
///
/// # Example
/// ```ignore
/// let cache = CacheHandle::new(CacheConfig::default())?;
/// let sweep_handle = spawn_sweep_task(cache.clone());
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: CacheHandle) -> JoinHandle<()> {
    let interval = cache.config().sweep_interval;
    let cache_name = cache.config().cache_name.clone();

    tokio::spawn(async move {
        info!(
            cache_name = %cache_name,
            interval_secs = interval.as_secs(),
            "starting expiration sweep task"
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_expired().await;

            if removed > 0 {
                info!(cache_name = %cache_name, removed, "sweep removed expired entries");
            } else {
                debug!(cache_name = %cache_name, "sweep found no expired entries");
            }
        }
    })
}
