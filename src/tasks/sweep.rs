//! Expiration Sweep Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{lock_store, CacheStore};

/// Spawns the task that sweeps `store` every `interval`.
///
/// The first pass runs one full interval after spawning. Each pass takes the
/// store lock once, removes every entry older than `interval`, and releases
/// the lock before sleeping again.
///
/// The task exits when `shutdown` fires or its sender is dropped.
///
/// # Arguments
/// * `store` - Shared store, the same one the cache reads and writes
/// * `interval` - Sweep period and entry time-to-live
/// * `shutdown` - Stop signal owned by the cache
///
/// # Returns
/// A JoinHandle that resolves once the task has stopped.
pub fn spawn_sweep_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(interval = ?interval, "starting cache sweep task");

        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let (removed, remaining) = {
                        let mut guard = lock_store(&store);
                        let removed = guard.sweep(Instant::now());
                        (removed, guard.len())
                    };

                    if removed > 0 {
                        info!(removed, remaining, "cache sweep removed expired entries");
                    } else {
                        debug!(remaining, "cache sweep found no expired entries");
                    }
                }
                _ = &mut shutdown => {
                    debug!("cache sweep task stopping");
                    break;
                }
            }
        }
    })
}
