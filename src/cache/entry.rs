//! Cache entry with an absolute expiry instant.

use chrono::{DateTime, Duration, Utc};

/// A cached value together with the instant after which it is stale.
///
/// # Example
///
/// ```
/// use sla_checker::cache::CacheEntry;
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// let entry = CacheEntry::new("value", now, Duration::seconds(30));
/// assert!(!entry.is_expired_at(now));
/// assert!(entry.is_expired_at(now + Duration::seconds(31)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<T> {
    /// The stored value.
    pub value: T,
    /// The entry is stale once the current instant is after this one.
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Creates an entry written at `now` that lives for `ttl`.
    pub fn new(value: T, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: now + ttl,
        }
    }

    /// Returns true when `now` is strictly after the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
