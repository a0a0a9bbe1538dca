//! Generic TTL cache guarded by a single mutex.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Duration, Utc};

use super::entry::CacheEntry;

/// A string-keyed cache whose entries all share one time-to-live.
///
/// Every operation takes the same lock over the whole map, so calls from
/// different threads serialize. Expiry is checked lazily on [`get`]; a stale
/// entry stays in the map until it is overwritten or deleted.
///
/// [`get`]: ExpiringCache::get
///
/// # Example
///
/// ```
/// use sla_checker::cache::ExpiringCache;
/// use chrono::Duration;
///
/// let cache = ExpiringCache::new(Duration::hours(1));
/// cache.set("2024_GB", vec![1, 2, 3]);
///
/// assert_eq!(cache.get("2024_GB"), Some(vec![1, 2, 3]));
/// assert_eq!(cache.get("2024_DE"), None);
/// ```
#[derive(Debug)]
pub struct ExpiringCache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
    ttl: Duration,
}

impl<T: Clone> ExpiringCache<T> {
    /// Creates an empty cache whose entries live for `ttl` after being set.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns a clone of the value stored under `key` if it has not expired.
    ///
    /// A miss leaves the cache untouched.
    pub fn get(&self, key: &str) -> Option<T> {
        let now = Utc::now();
        let entries = self.lock();
        entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.value.clone())
    }

    /// Stores `value` under `key`, resetting its expiry to now plus the TTL.
    pub fn set(&self, key: impl Into<String>, value: T) {
        let entry = CacheEntry::new(value, Utc::now(), self.ttl);
        self.lock().insert(key.into(), entry);
    }

    /// Removes the entry for `key`. Missing keys are ignored.
    pub fn delete(&self, key: &str) {
        self.lock().remove(key);
    }

    /// Number of stored entries, including expired ones not yet overwritten.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The map is left consistent by every critical section, so a panic in
    // another holder does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<T>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
