//! Cache Store Module
//!
//! Unsynchronized key/value storage with uniform time-based expiration.
//! Locking lives one level up in [`ExpiringCache`](crate::cache::ExpiringCache).

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Map of cache keys to entries, all sharing one expiration interval.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Time-to-live applied to every entry
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
        }
    }

    /// Returns the expiration interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Insert ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// An existing entry for the key is replaced outright, timestamp included.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.insert_at(key, value, Instant::now());
    }

    /// Stores `value` under `key` with an explicit insertion time.
    pub fn insert_at(&mut self, key: String, value: Vec<u8>, now: Instant) {
        self.entries.insert(key, CacheEntry::with_timestamp(value, now));
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, if present.
    ///
    /// Lookups never touch the entry's timestamp.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value().to_vec())
    }

    // == Sweep ==
    /// Removes every entry older than the interval as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let interval = self.interval;
        self.entries
            .retain(|_, entry| !entry.is_expired(now, interval));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
