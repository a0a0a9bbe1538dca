//! Reusable SLA policies.

use chrono::{DateTime, FixedOffset, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::sla::{validate_budget, validate_calendar};
use super::{BusinessHours, SlaConfig};

/// An SLA definition without a start time.
///
/// Policies are loaded from configuration by name (or sent inline to the
/// API) and turned into an [`SlaConfig`] once the start time and the
/// holiday list for the relevant country are known.
///
/// # Example
///
/// ```
/// use sla_checker::models::{BusinessHours, SlaPolicy};
/// use chrono::{DateTime, NaiveDate, Weekday};
///
/// let policy = SlaPolicy {
///     duration_amount: 4,
///     duration_unit: "hours".to_string(),
///     business_hours: BusinessHours { start_hour: 9, end_hour: 17 },
///     valid_days: vec![Weekday::Mon, Weekday::Fri],
///     ignore_holidays: false,
///     holiday_country: Some("GB".to_string()),
/// };
///
/// let start = DateTime::parse_from_rfc3339("2024-08-30T16:00:00Z").unwrap();
/// let holidays = vec![NaiveDate::from_ymd_opt(2024, 8, 26).unwrap()];
/// let config = policy.to_config(start, holidays);
///
/// assert_eq!(config.start_time, start);
/// assert_eq!(config.holidays.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaPolicy {
    /// How many `duration_unit`s of business time the SLA allows.
    pub duration_amount: i64,
    /// One of `seconds`, `minutes`, `hours` or `days`.
    pub duration_unit: String,
    /// The daily business window.
    pub business_hours: BusinessHours,
    /// Weekdays on which business time accrues.
    pub valid_days: Vec<Weekday>,
    /// When true, holidays are never looked up or consulted.
    #[serde(default)]
    pub ignore_holidays: bool,
    /// ISO 3166-1 alpha-2 country whose public holidays apply.
    #[serde(default)]
    pub holiday_country: Option<String>,
}

impl SlaPolicy {
    /// Builds the configuration for an SLA starting at `start_time`.
    pub fn to_config(
        &self,
        start_time: DateTime<FixedOffset>,
        holidays: Vec<NaiveDate>,
    ) -> SlaConfig {
        SlaConfig {
            start_time,
            duration_amount: self.duration_amount,
            duration_unit: self.duration_unit.clone(),
            business_hours: self.business_hours,
            valid_days: self.valid_days.clone(),
            holidays,
            ignore_holidays: self.ignore_holidays,
        }
    }

    /// Checks the calendar, the duration unit and the size of the budget.
    pub fn validate(&self) -> EngineResult<()> {
        validate_calendar(&self.business_hours, &self.valid_days)?;
        validate_budget(self.duration_amount, &self.duration_unit)
    }

    /// Returns true when holidays need to be fetched for this policy.
    pub fn needs_holidays(&self) -> bool {
        !self.ignore_holidays && self.holiday_country.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn make_policy() -> SlaPolicy {
        SlaPolicy {
            duration_amount: 2,
            duration_unit: "days".to_string(),
            business_hours: BusinessHours {
                start_hour: 8,
                end_hour: 18,
            },
            valid_days: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed],
            ignore_holidays: true,
            holiday_country: None,
        }
    }

    #[test]
    fn test_to_config_copies_policy_fields() {
        let policy = make_policy();
        let start = DateTime::parse_from_rfc3339("2024-01-02T10:00:00+02:00").unwrap();

        let config = policy.to_config(start, vec![]);

        assert_eq!(config.start_time, start);
        assert_eq!(config.duration_amount, 2);
        assert_eq!(config.duration_unit, "days");
        assert_eq!(config.business_hours, policy.business_hours);
        assert_eq!(config.valid_days, policy.valid_days);
        assert!(config.ignore_holidays);
    }

    #[test]
    fn test_validate_rejects_unknown_unit() {
        let mut policy = make_policy();
        policy.duration_unit = "weeks".to_string();
        assert!(matches!(
            policy.validate(),
            Err(EngineError::InvalidDurationUnit { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_huge_amount() {
        let mut policy = make_policy();
        policy.duration_amount = i64::MAX;
        assert!(matches!(
            policy.validate(),
            Err(EngineError::InvalidConfig { ref field, .. }) if field == "duration_amount"
        ));
    }

    #[test]
    fn test_needs_holidays() {
        let mut policy = make_policy();
        assert!(!policy.needs_holidays());

        policy.holiday_country = Some("GB".to_string());
        assert!(!policy.needs_holidays());

        policy.ignore_holidays = false;
        assert!(policy.needs_holidays());
    }

    #[test]
    fn test_policy_deserializes_from_yaml() {
        let yaml = r#"
duration_amount: 4
duration_unit: hours
business_hours:
  start_hour: 9
  end_hour: 17
valid_days: [Mon, Tue, Wed, Thu, Fri]
holiday_country: GB
"#;
        let policy: SlaPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.valid_days.len(), 5);
        assert_eq!(policy.holiday_country.as_deref(), Some("GB"));
        assert!(!policy.ignore_holidays);
        assert!(policy.validate().is_ok());
    }
}
