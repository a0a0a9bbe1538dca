//! Units in which an SLA length is expressed.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The unit of an SLA duration amount.
///
/// A day is 24 hours of business time, not one business day.
///
/// # Example
///
/// ```
/// use sla_checker::models::DurationUnit;
/// use chrono::Duration;
///
/// let unit: DurationUnit = "hours".parse().unwrap();
/// assert_eq!(unit, DurationUnit::Hours);
/// assert_eq!(unit.to_duration(4).unwrap(), Duration::hours(4));
/// assert!("weeks".parse::<DurationUnit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Days of 24 hours.
    Days,
}

impl DurationUnit {
    /// Converts `amount` of this unit into a duration.
    ///
    /// Fails with [`EngineError::InvalidConfig`] when the result does not
    /// fit in a [`Duration`].
    pub fn to_duration(self, amount: i64) -> EngineResult<Duration> {
        let duration = match self {
            DurationUnit::Seconds => Duration::try_seconds(amount),
            DurationUnit::Minutes => Duration::try_minutes(amount),
            DurationUnit::Hours => Duration::try_hours(amount),
            DurationUnit::Days => amount.checked_mul(24).and_then(Duration::try_hours),
        };
        duration.ok_or_else(|| EngineError::InvalidConfig {
            field: "duration_amount".to_string(),
            message: format!("{} {} is out of range", amount, self),
        })
    }
}

impl FromStr for DurationUnit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seconds" => Ok(DurationUnit::Seconds),
            "minutes" => Ok(DurationUnit::Minutes),
            "hours" => Ok(DurationUnit::Hours),
            "days" => Ok(DurationUnit::Days),
            other => Err(EngineError::InvalidDurationUnit {
                unit: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationUnit::Seconds => write!(f, "seconds"),
            DurationUnit::Minutes => write!(f, "minutes"),
            DurationUnit::Hours => write!(f, "hours"),
            DurationUnit::Days => write!(f, "days"),
        }
    }
}
