//! The outcome of checking an SLA at a given instant.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The SLA status at one query instant.
///
/// Field names on the wire are `isWithinSLA`, `deadline`, `remaining`,
/// `overage` and `workingTimeRemaining`. Durations are `HH:MM:SS` strings.
/// `remaining` and `overage` are wall-clock gaps to the deadline;
/// `working_time_remaining` counts business time only.
///
/// # Example
///
/// ```
/// use sla_checker::models::SlaResult;
/// use chrono::DateTime;
///
/// let result = SlaResult {
///     is_within_sla: true,
///     deadline: DateTime::parse_from_rfc3339("2024-09-02T12:00:00Z").unwrap(),
///     remaining: "68:00:00".to_string(),
///     overage: "00:00:00".to_string(),
///     working_time_remaining: "04:00:00".to_string(),
/// };
///
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["isWithinSLA"], true);
/// assert_eq!(json["workingTimeRemaining"], "04:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaResult {
    /// True iff the query instant is before the deadline.
    #[serde(rename = "isWithinSLA")]
    pub is_within_sla: bool,
    /// The instant the business-time budget runs out.
    pub deadline: DateTime<FixedOffset>,
    /// Wall-clock time left until the deadline, or `00:00:00`.
    pub remaining: String,
    /// Wall-clock time elapsed since the deadline, or `00:00:00`.
    pub overage: String,
    /// Business time left until the deadline.
    #[serde(rename = "workingTimeRemaining")]
    pub working_time_remaining: String,
}
