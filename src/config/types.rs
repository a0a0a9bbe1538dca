//! Configuration types for SLA evaluation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

use crate::holidays::StaticHolidaySource;
use crate::models::SlaPolicy;

/// Policies configuration file structure (`policies.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PoliciesConfig {
    /// Map of policy name to policy.
    pub policies: HashMap<String, SlaPolicy>,
}

/// One holiday calendar file (`holidays/*.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendar {
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// The year the dates belong to.
    pub year: i32,
    /// The holiday dates.
    pub dates: Vec<NaiveDate>,
}

/// The complete checker configuration loaded from YAML files.
///
/// Aggregates the named policies and every holiday calendar found in a
/// configuration directory.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Named SLA policies.
    policies: HashMap<String, SlaPolicy>,
    /// Holiday calendars keyed by year and country.
    holidays: StaticHolidaySource,
}

impl CheckerConfig {
    /// Creates a new CheckerConfig from its component parts.
    pub fn new(policies: HashMap<String, SlaPolicy>, calendars: Vec<HolidayCalendar>) -> Self {
        let mut holidays = StaticHolidaySource::new();
        for calendar in calendars {
            holidays.insert(&calendar.country_code, calendar.year, calendar.dates);
        }
        Self { policies, holidays }
    }

    /// Returns all policies.
    pub fn policies(&self) -> &HashMap<String, SlaPolicy> {
        &self.policies
    }

    /// Returns the configured holiday calendars.
    pub fn holidays(&self) -> &StaticHolidaySource {
        &self.holidays
    }
}
