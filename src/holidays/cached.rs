//! Memoizing decorator for holiday sources.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::cache::ExpiringCache;
use crate::error::EngineResult;

use super::source::HolidaySource;

/// Holiday lists are refreshed weekly.
pub const DEFAULT_HOLIDAY_TTL_HOURS: i64 = 24 * 7;

/// Cache key for one year of one country's holidays, e.g. `2024_GB`.
pub fn cache_key(year: i32, country_code: &str) -> String {
    format!("{}_{}", year, country_code.to_uppercase())
}

/// Wraps a [`HolidaySource`] so that each year and country is fetched at
/// most once per TTL.
///
/// Failed fetches are not cached.
///
/// # Example
///
/// ```
/// use sla_checker::holidays::{CachedHolidaySource, HolidaySource, StaticHolidaySource};
/// use chrono::NaiveDate;
///
/// let mut inner = StaticHolidaySource::new();
/// inner.insert("DE", 2023, vec![NaiveDate::from_ymd_opt(2023, 12, 25).unwrap()]);
///
/// let source = CachedHolidaySource::new(inner);
/// assert_eq!(source.fetch_holidays(2023, "DE").unwrap().len(), 1);
/// assert_eq!(source.cached_calendars(), 1);
/// ```
#[derive(Debug)]
pub struct CachedHolidaySource<S> {
    inner: S,
    cache: ExpiringCache<Vec<NaiveDate>>,
}

impl<S: HolidaySource> CachedHolidaySource<S> {
    /// Wraps `inner` with the default one-week TTL.
    pub fn new(inner: S) -> Self {
        Self::with_ttl(inner, Duration::hours(DEFAULT_HOLIDAY_TTL_HOURS))
    }

    /// Wraps `inner` with a custom TTL.
    pub fn with_ttl(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            cache: ExpiringCache::new(ttl),
        }
    }

    /// Drops the cached calendar for `year` and `country_code`.
    pub fn invalidate(&self, year: i32, country_code: &str) {
        self.cache.delete(&cache_key(year, country_code));
    }

    /// Number of calendars held in the cache.
    pub fn cached_calendars(&self) -> usize {
        self.cache.len()
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: HolidaySource> HolidaySource for CachedHolidaySource<S> {
    fn fetch_holidays(&self, year: i32, country_code: &str) -> EngineResult<Vec<NaiveDate>> {
        let key = cache_key(year, country_code);

        if let Some(holidays) = self.cache.get(&key) {
            debug!(key = %key, "Holiday cache hit");
            return Ok(holidays);
        }

        debug!(key = %key, "Holiday cache miss");
        let holidays = self.inner.fetch_holidays(year, country_code)?;
        self.cache.set(key, holidays.clone());
        Ok(holidays)
    }
}
