//! Cache Entry Module
//!
//! Defines a single stored payload stamped with its insertion time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body together with the moment it was stored.
///
/// Timestamps come from the monotonic Tokio clock, so ages are immune to
/// wall-clock adjustments and follow the paused clock in tests.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Insertion timestamp
    created_at: Instant,
    /// The stored payload
    value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry with an explicit insertion time.
    pub fn with_timestamp(value: Vec<u8>, created_at: Instant) -> Self {
        Self { created_at, value }
    }

    // == Accessors ==
    /// Borrows the stored payload.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Age of the entry as seen from `now`.
    ///
    /// Saturates to zero if `now` precedes the insertion time.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `interval` at `now`.
    ///
    /// Boundary condition: an entry whose age equals `interval` exactly is
    /// still live; only a strictly greater age counts as expired.
    pub fn is_expired(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) > interval
    }
}
