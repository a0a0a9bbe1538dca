//! Public holiday sources.
//!
//! The SLA engine only consumes a list of dates. This module provides the
//! contract for looking those dates up by year and country, an in-memory
//! source backed by configuration, a caching decorator for any source, and a
//! decoder for the public-holiday JSON payload served by holiday APIs, which
//! the configuration loader also reads from disk.

mod cached;
mod payload;
mod source;

pub use cached::{CachedHolidaySource, DEFAULT_HOLIDAY_TTL_HOURS, cache_key};
pub use payload::{PublicHoliday, parse_public_holidays};
pub use source::{HolidaySource, StaticHolidaySource};
