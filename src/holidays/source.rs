//! The holiday source contract and an in-memory implementation.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Something that can list the public holidays of a country for a year.
///
/// Implementations must be shareable across request handlers.
pub trait HolidaySource: Send + Sync {
    /// Returns the holidays of `country_code` in `year`, in calendar order.
    fn fetch_holidays(&self, year: i32, country_code: &str) -> EngineResult<Vec<NaiveDate>>;

    /// Returns the holidays of `country_code` for every year in `years`.
    ///
    /// Fails on the first year that cannot be fetched.
    fn fetch_holidays_for_years(
        &self,
        years: RangeInclusive<i32>,
        country_code: &str,
    ) -> EngineResult<Vec<NaiveDate>> {
        let mut holidays = Vec::new();
        for year in years {
            holidays.extend(self.fetch_holidays(year, country_code)?);
        }
        Ok(holidays)
    }
}

/// A holiday source serving a fixed set of calendars.
///
/// # Example
///
/// ```
/// use sla_checker::holidays::{HolidaySource, StaticHolidaySource};
/// use chrono::NaiveDate;
///
/// let mut source = StaticHolidaySource::new();
/// source.insert("GB", 2024, vec![NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()]);
///
/// assert_eq!(source.fetch_holidays(2024, "GB").unwrap().len(), 1);
/// assert!(source.fetch_holidays(2024, "FR").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHolidaySource {
    calendars: HashMap<(i32, String), Vec<NaiveDate>>,
}

impl StaticHolidaySource {
    /// Creates a source with no calendars.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or extends) the calendar for `country_code` in `year`.
    ///
    /// Country codes are matched case-insensitively.
    pub fn insert(&mut self, country_code: &str, year: i32, dates: Vec<NaiveDate>) {
        let calendar = self
            .calendars
            .entry((year, country_code.to_uppercase()))
            .or_default();
        calendar.extend(dates);
        calendar.sort_unstable();
        calendar.dedup();
    }

    /// Number of (year, country) calendars held.
    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    /// Returns true if no calendar is held.
    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}

impl HolidaySource for StaticHolidaySource {
    fn fetch_holidays(&self, year: i32, country_code: &str) -> EngineResult<Vec<NaiveDate>> {
        self.calendars
            .get(&(year, country_code.to_uppercase()))
            .cloned()
            .ok_or_else(|| EngineError::HolidaySource {
                message: format!("no holiday calendar for {} in {}", country_code, year),
            })
    }
}
