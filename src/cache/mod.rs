//! Expiring in-memory cache.
//!
//! This module provides a small generic key-value cache whose entries expire
//! a fixed time after they were written. It is used to memoize holiday
//! lookups so that each year and country is only fetched once per TTL.

mod entry;
mod expiring;

pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
