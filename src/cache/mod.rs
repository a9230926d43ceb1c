//! Cache Module
//!
//! In-memory response cache with uniform time-based expiration.

mod entry;
mod expiring;
mod store;


use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use store::CacheStore;

/// Locks the shared store, recovering the guard if a previous holder panicked.
///
/// Every store mutation is a single map operation, so a poisoned store is
/// still consistent.
pub(crate) fn lock_store(store: &Mutex<CacheStore>) -> MutexGuard<'_, CacheStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
