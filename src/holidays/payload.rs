//! Decoding of public-holiday API payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One entry of a public-holiday API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    /// The date as `YYYY-MM-DD`.
    pub date: String,
    /// The name in the country's language.
    #[serde(default)]
    pub local_name: String,
    /// The English name.
    #[serde(default)]
    pub name: String,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default)]
    pub country_code: String,
}

impl PublicHoliday {
    /// Parses the `date` field.
    pub fn parse_date(&self) -> EngineResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|e| EngineError::HolidaySource {
            message: format!("error parsing date {}: {}", self.date, e),
        })
    }
}

/// Decodes a JSON array of public holidays into their dates.
///
/// Fails if the body is not such an array or any date is malformed.
///
/// # Example
///
/// ```
/// use sla_checker::holidays::parse_public_holidays;
/// use chrono::NaiveDate;
///
/// let body = r#"[
///     {"date": "2023-01-01", "localName": "Neujahr", "name": "New Year's Day", "countryCode": "DE"},
///     {"date": "2023-12-25", "localName": "Weihnachtstag", "name": "Christmas Day", "countryCode": "DE"}
/// ]"#;
///
/// let dates = parse_public_holidays(body).unwrap();
/// assert_eq!(dates[1], NaiveDate::from_ymd_opt(2023, 12, 25).unwrap());
/// ```
pub fn parse_public_holidays(body: &str) -> EngineResult<Vec<NaiveDate>> {
    let holidays: Vec<PublicHoliday> =
        serde_json::from_str(body).map_err(|e| EngineError::HolidaySource {
            message: format!("error decoding JSON: {}", e),
        })?;

    holidays.iter().map(PublicHoliday::parse_date).collect()
}
