//! SLA deadline calculation.
//!
//! The deadline is found by moving the start time to the next business
//! opening, then walking forward one hour at a time, spending one hour of
//! budget for every hour that starts inside a business slot, and jumping to
//! the next business day whenever the walk leaves the business window.

use chrono::{DateTime, Duration, FixedOffset};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::SlaConfig;

use super::calendar::BusinessCalendar;

/// Computes the instant at which the SLA's business-time budget runs out.
///
/// # Arguments
///
/// * `config` - The SLA to evaluate
///
/// # Returns
///
/// The deadline in the offset of `config.start_time`, or an error if:
/// - The duration unit is not one of seconds, minutes, hours or days
/// - The business window opens at an hour that does not exist
///
/// # Behavior
///
/// - A zero or negative budget returns the start time unchanged
/// - Budgets resolve to whole hours: a partial final hour is spent in full
/// - The deadline can land exactly on the closing hour when the last hour of
///   budget is spent in the last business hour of a day
/// - A start outside business hours, on an invalid day or on a holiday
///   accrues nothing until the next business opening; a start before opening
///   on a business day counts from that day's opening
/// - A window closing at midnight continues on the next business day
///
/// The walk does not terminate when `valid_days` is empty; call
/// [`SlaConfig::validate`] first.
///
/// # Example
///
/// ```
/// use sla_checker::calculation::compute_deadline;
/// use sla_checker::models::{BusinessHours, SlaConfig};
/// use chrono::{DateTime, Weekday};
///
/// // Friday 16:00 with a 4 hour SLA: one hour on Friday, three on Monday
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
/// assert_eq!(deadline, DateTime::parse_from_rfc3339("2024-09-02T12:00:00Z").unwrap());
/// ```
pub fn compute_deadline(config: &SlaConfig) -> EngineResult<DateTime<FixedOffset>> {
    let budget = config.budget()?;
    let calendar = BusinessCalendar::new(config);
    let one_hour = Duration::hours(1);

    let mut cursor = calendar.to_local(config.start_time);
    let mut remaining = budget;

    if remaining > Duration::zero() {
        cursor = calendar.next_business_opening(cursor)?;
    }

    while remaining > Duration::zero() {
        if calendar.is_business_slot(cursor) {
            if remaining <= one_hour {
                // Budget runs out inside this slot; the deadline is its end.
                cursor += one_hour;
                break;
            }
            remaining -= one_hour;
        }

        cursor += one_hour;

        if !calendar.is_within_business_hours(cursor) {
            // Snap from the hour just spent: a window closing at midnight has
            // already rolled `cursor` onto the following date.
            cursor = calendar.next_business_day(cursor - one_hour)?;
        }
    }

    let deadline = calendar.localize(cursor)?;
    debug!(
        start_time = %config.start_time,
        budget_seconds = budget.num_seconds(),
        deadline = %deadline,
        "Computed SLA deadline"
    );
    Ok(deadline)
}
