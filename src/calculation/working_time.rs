//! Business time remaining between a query instant and a deadline.

use chrono::{DateTime, Duration, FixedOffset};

use crate::error::EngineResult;
use crate::models::SlaConfig;

use super::calendar::BusinessCalendar;

/// Sums the business time between `now` and `deadline`.
///
/// The walk starts at `now`, moved forward to the next business opening if
/// `now` is outside a business slot, then adds one business-day segment at a
/// time, each clipped to the closing hour and to the deadline.
///
/// # Returns
///
/// The business time remaining, or zero when `now` is at or after the
/// deadline. Both instants are read in the offset of `config.start_time`.
///
/// # Example
///
/// ```
/// use sla_checker::calculation::{compute_deadline, compute_working_time};
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
/// let deadline = compute_deadline(&config).unwrap();
/// let now = DateTime::parse_from_rfc3339("2024-08-30T17:00:00Z").unwrap();
///
/// let remaining = compute_working_time(now, deadline, &config).unwrap();
/// assert_eq!(remaining, Duration::hours(3));
/// ```
pub fn compute_working_time(
    now: DateTime<FixedOffset>,
    deadline: DateTime<FixedOffset>,
    config: &SlaConfig,
) -> EngineResult<Duration> {
    let calendar = BusinessCalendar::new(config);
    let deadline = calendar.to_local(deadline);
    let mut cursor = calendar.to_local(now);

    if cursor >= deadline {
        return Ok(Duration::zero());
    }

    cursor = calendar.next_business_opening(cursor)?;

    let mut total = Duration::zero();
    while cursor < deadline {
        let segment_end = calendar.closing_time(cursor).min(deadline);
        if segment_end > cursor {
            total += segment_end - cursor;
        }
        cursor = calendar.next_business_day(cursor)?;
    }

    Ok(total)
}
