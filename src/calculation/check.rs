//! SLA result assembly.

use chrono::{DateTime, Duration, FixedOffset};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{SlaConfig, SlaResult};

use super::deadline::compute_deadline;
use super::format::format_duration;
use super::working_time::compute_working_time;

/// Evaluates the SLA at the instant `now`.
///
/// This function builds the full report by:
/// 1. Computing the deadline (any configuration error fails the whole call)
/// 2. Comparing `now` with the deadline
/// 3. Measuring the wall-clock gap on whichever side of the deadline `now` is
/// 4. Summing the business time left until the deadline
///
/// `now` may carry any offset; it is compared as an instant and read in the
/// offset of `config.start_time` for the business-time walk.
///
/// # Example
///
/// ```
/// use sla_checker::calculation::compute_result;
/// use sla_checker::models::{BusinessHours, SlaConfig};
/// use chrono::{DateTime, Weekday};
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
/// let now = DateTime::parse_from_rfc3339("2024-08-30T17:00:00Z").unwrap();
/// let result = compute_result(&config, now).unwrap();
///
/// assert!(result.is_within_sla);
/// assert_eq!(result.remaining, "67:00:00");
/// assert_eq!(result.overage, "00:00:00");
/// assert_eq!(result.working_time_remaining, "03:00:00");
/// ```
pub fn compute_result(config: &SlaConfig, now: DateTime<FixedOffset>) -> EngineResult<SlaResult> {
    let deadline = compute_deadline(config)?;
    let now = now.with_timezone(deadline.offset());

    let is_within_sla = now < deadline;
    let gap = deadline - now;
    let remaining = gap.max(Duration::zero());
    let overage = (-gap).max(Duration::zero());
    let working_time = compute_working_time(now, deadline, config)?;

    debug!(
        deadline = %deadline,
        now = %now,
        is_within_sla,
        working_seconds = working_time.num_seconds(),
        "Evaluated SLA"
    );

    Ok(SlaResult {
        is_within_sla,
        deadline,
        remaining: format_duration(remaining),
        overage: format_duration(overage),
        working_time_remaining: format_duration(working_time),
    })
}

/// Returns true if `now` is before the SLA deadline.
///
/// Shorthand for [`compute_result`] when only the verdict is needed.
pub fn is_within_sla(config: &SlaConfig, now: DateTime<FixedOffset>) -> EngineResult<bool> {
    Ok(now < compute_deadline(config)?)
}
