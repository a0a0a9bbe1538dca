//! SLA configuration model.
//!
//! This module defines [`SlaConfig`], the complete input to a deadline
//! calculation, and [`BusinessHours`], the daily window in which business
//! time accrues.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::DurationUnit;

/// The daily business window, as whole hours of the local day.
///
/// The window is half-open: an instant whose hour is `start_hour` is inside,
/// an instant whose hour is `end_hour` is outside.
///
/// # Example
///
/// ```
/// use sla_checker::models::BusinessHours;
///
/// let hours = BusinessHours { start_hour: 9, end_hour: 17 };
/// assert!(hours.contains_hour(9));
/// assert!(hours.contains_hour(16));
/// assert!(!hours.contains_hour(17));
/// assert_eq!(hours.hours_per_day(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    /// First business hour of the day (inclusive).
    pub start_hour: u32,
    /// Hour at which business time stops accruing (exclusive).
    pub end_hour: u32,
}

impl BusinessHours {
    /// Returns true if `hour` falls inside `[start_hour, end_hour)`.
    pub fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }

    /// Number of business hours in one day.
    pub fn hours_per_day(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// The local time at which the business day opens.
    pub fn opening_time(&self) -> EngineResult<NaiveTime> {
        NaiveTime::from_hms_opt(self.start_hour, 0, 0).ok_or_else(|| EngineError::InvalidConfig {
            field: "business_hours.start_hour".to_string(),
            message: format!("{} is not an hour of the day", self.start_hour),
        })
    }

    /// Offset of the closing hour from local midnight.
    ///
    /// Expressed as a duration so that an `end_hour` of 24 means midnight.
    pub fn closing_offset(&self) -> Duration {
        Duration::hours(i64::from(self.end_hour))
    }

    /// Checks that the window is non-empty and fits in one day.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_hour >= 24 {
            return Err(EngineError::InvalidConfig {
                field: "business_hours.start_hour".to_string(),
                message: format!("{} is not an hour of the day", self.start_hour),
            });
        }
        if self.end_hour > 24 {
            return Err(EngineError::InvalidConfig {
                field: "business_hours.end_hour".to_string(),
                message: format!("{} is past the end of the day", self.end_hour),
            });
        }
        if self.start_hour >= self.end_hour {
            return Err(EngineError::InvalidConfig {
                field: "business_hours".to_string(),
                message: format!(
                    "start hour {} must be before end hour {}",
                    self.start_hour, self.end_hour
                ),
            });
        }
        Ok(())
    }
}

/// Everything needed to compute one SLA deadline.
///
/// All instants are interpreted in the UTC offset of `start_time`; holiday
/// dates are matched against local calendar dates in that offset.
///
/// # Example
///
/// ```
/// use sla_checker::models::{BusinessHours, SlaConfig};
/// use chrono::{DateTime, Duration, Weekday};
///
/// let config = SlaConfig {
///     start_time: DateTime::parse_from_rfc3339("2024-08-30T16:00:00Z").unwrap(),
///     duration_amount: 4,
///     duration_unit: "hours".to_string(),
///     business_hours: BusinessHours { start_hour: 9, end_hour: 17 },
///     valid_days: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
///     holidays: vec![],
///     ignore_holidays: false,
/// };
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.budget().unwrap(), Duration::hours(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaConfig {
    /// The instant the SLA clock starts.
    pub start_time: DateTime<FixedOffset>,
    /// How many `duration_unit`s of business time the SLA allows.
    pub duration_amount: i64,
    /// One of `seconds`, `minutes`, `hours` or `days`.
    ///
    /// Kept as text so that an unknown unit fails the calculation rather
    /// than the construction of the configuration.
    pub duration_unit: String,
    /// The daily business window.
    pub business_hours: BusinessHours,
    /// Weekdays on which business time accrues.
    pub valid_days: Vec<Weekday>,
    /// Dates on which no business time accrues.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// When true, `holidays` is never consulted.
    #[serde(default)]
    pub ignore_holidays: bool,
}

impl SlaConfig {
    /// Returns the total business-time budget.
    ///
    /// Fails with [`EngineError::InvalidDurationUnit`] for an unknown unit
    /// and with [`EngineError::InvalidConfig`] when the amount overflows.
    pub fn budget(&self) -> EngineResult<Duration> {
        let unit: DurationUnit = self.duration_unit.parse()?;
        unit.to_duration(self.duration_amount)
    }

    /// Checks the preconditions the deadline calculation relies on.
    ///
    /// The calculation itself does not call this. An empty `valid_days`
    /// would make it advance forever, so callers validate first.
    pub fn validate(&self) -> EngineResult<()> {
        validate_calendar(&self.business_hours, &self.valid_days)?;
        validate_budget(self.duration_amount, &self.duration_unit)
    }
}

/// Largest accepted budget: one leap year of business time.
pub const MAX_BUDGET_HOURS: i64 = 366 * 24;

pub(crate) fn validate_budget(amount: i64, unit: &str) -> EngineResult<()> {
    let unit: DurationUnit = unit.parse()?;
    let budget = unit.to_duration(amount)?;
    if budget > Duration::hours(MAX_BUDGET_HOURS) {
        return Err(EngineError::InvalidConfig {
            field: "duration_amount".to_string(),
            message: format!(
                "{} {} exceeds the limit of {} hours",
                amount, unit, MAX_BUDGET_HOURS
            ),
        });
    }
    Ok(())
}

pub(crate) fn validate_calendar(
    business_hours: &BusinessHours,
    valid_days: &[Weekday],
) -> EngineResult<()> {
    if valid_days.is_empty() {
        return Err(EngineError::InvalidConfig {
            field: "valid_days".to_string(),
            message: "at least one weekday is required".to_string(),
        });
    }
    business_hours.validate()
}
