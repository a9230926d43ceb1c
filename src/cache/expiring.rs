//! Expiring Cache Module
//!
//! Thread-safe front end over [`CacheStore`] that owns its sweep task.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{lock_store, CacheStore};
use crate::error::CacheError;
use crate::tasks::spawn_sweep_task;

// == Expiring Cache ==
/// In-memory byte cache whose entries expire a fixed interval after insertion.
///
/// All reads, writes and sweep passes serialize on one exclusive lock. That is
/// plenty for a few dozen cached API responses; a sharded map or reader/writer
/// lock could replace it without changing behavior.
///
/// An entry is guaranteed to be gone by the first sweep after it turns
/// `interval` old, so it may linger for up to `2 * interval` in the worst case.
#[derive(Debug)]
pub struct ExpiringCache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    shutdown_tx: Option<oneshot::Sender<()>>,
    sweeper: Option<JoinHandle<()>>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// * `CacheError::InvalidInterval` if `interval` is zero
    /// * `CacheError::NoRuntime` if no Tokio runtime is available
    pub fn new(interval: Duration) -> Result<Self, CacheError> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval);
        }
        if Handle::try_current().is_err() {
            return Err(CacheError::NoRuntime);
        }

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let sweeper = spawn_sweep_task(Arc::clone(&store), interval, shutdown_rx);

        Ok(Self {
            store,
            interval,
            shutdown_tx: Some(shutdown_tx),
            sweeper: Some(sweeper),
        })
    }

    /// Returns the expiration interval, which is also the sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, bytes = value.len(), "cache add");
        lock_store(&self.store).insert(key, value);
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`.
    ///
    /// `None` means the key was never added or has already been swept.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = lock_store(&self.store).get(key);
        debug!(key, hit = value.is_some(), "cache lookup");
        value
    }

    /// Number of entries currently held, expired-but-unswept ones included.
    pub fn len(&self) -> usize {
        lock_store(&self.store).len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        lock_store(&self.store).is_empty()
    }

    // == Shutdown ==
    /// Stops the sweep task and waits for it to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(sweeper) = self.sweeper.take() {
            if let Err(err) = sweeper.await {
                warn!(error = %err, "cache sweep task ended abnormally");
            }
        }
    }
}

impl Drop for ExpiringCache {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[test]
    fn test_new_without_runtime_is_rejected() {
        let result = ExpiringCache::new(Duration::from_secs(1));
        assert!(matches!(result, Err(CacheError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_new_rejects_zero_interval() {
        let result = ExpiringCache::new(Duration::ZERO);
        assert!(matches!(result, Err(CacheError::InvalidInterval)));
    }

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let cache = ExpiringCache::new(Duration::from_secs(5)).unwrap();

        cache.add("url1", vec![0x01u8, 0x02]);

        assert_eq!(cache.get("url1"), Some(vec![0x01, 0x02]));
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_interval_is_reported() {
        let cache = ExpiringCache::new(Duration::from_millis(750)).unwrap();
        assert_eq!(cache.interval(), Duration::from_millis(750));
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_unknown_key_misses() {
        let cache = ExpiringCache::new(Duration::from_secs(5)).unwrap();
        assert_eq!(cache.get("never-added"), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_empty_key_and_value() {
        let cache = ExpiringCache::new(Duration::from_secs(5)).unwrap();

        cache.add("", Vec::<u8>::new());

        assert_eq!(cache.get(""), Some(Vec::new()));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_expires_after_two_sweeps() {
        let cache = ExpiringCache::new(Duration::from_millis(50)).unwrap();
        cache.add("url1", vec![0x01u8, 0x02]);

        sleep(Duration::from_millis(10)).await;
        assert_eq!(cache.get("url1"), Some(vec![0x01, 0x02]));

        sleep(Duration::from_millis(110)).await;
        assert_eq!(cache.get("url1"), None);

        cache.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_scenario_overwrite_wins() {
        let cache = ExpiringCache::new(Duration::from_millis(100)).unwrap();

        cache.add("k", "a");
        sleep(Duration::from_millis(30)).await;
        cache.add("k", "b");
        sleep(Duration::from_millis(10)).await;

        assert_eq!(cache.get("k"), Some(b"b".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_premature_expiration() {
        let cache = ExpiringCache::new(Duration::from_millis(100)).unwrap();
        cache.add("k", "v");

        // Probe repeatedly while the entry is younger than the interval
        for _ in 0..9 {
            sleep(Duration::from_millis(11)).await;
            assert_eq!(cache.get("k"), Some(b"v".to_vec()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_does_not_extend_lifetime() {
        let cache = ExpiringCache::new(Duration::from_millis(50)).unwrap();
        cache.add("k", "v");

        for _ in 0..4 {
            sleep(Duration::from_millis(20)).await;
            let _ = cache.get("k");
        }
        // The 100ms pass removes it no matter how often it was read
        sleep(Duration::from_millis(70)).await;

        assert_eq!(cache.get("k"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_sweeping() {
        let cache = ExpiringCache::new(Duration::from_millis(50)).unwrap();
        let store = Arc::clone(&cache.store);
        cache.add("k", "v");

        cache.shutdown().await;

        sleep(Duration::from_millis(500)).await;
        assert_eq!(lock_store(&store).get("k"), Some(b"v".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_signals_sweep_task() {
        let cache = ExpiringCache::new(Duration::from_millis(50)).unwrap();
        let store = Arc::clone(&cache.store);

        drop(cache);
        sleep(Duration::from_millis(1)).await;

        // Only the test's handle remains once the task has exited
        assert_eq!(Arc::strong_count(&store), 1);
    }
}
