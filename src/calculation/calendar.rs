//! Business calendar queries shared by the deadline and working-time walks.
//!
//! Both walks run on local wall-clock times in the offset of the SLA start
//! time. Since that offset is fixed, adding an hour to the local time is the
//! same as adding an hour to the instant.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike,
};

use crate::error::{EngineError, EngineResult};
use crate::models::SlaConfig;

/// A read-only view of the calendar rules of one [`SlaConfig`].
#[derive(Debug, Clone, Copy)]
pub struct BusinessCalendar<'a> {
    config: &'a SlaConfig,
}

impl<'a> BusinessCalendar<'a> {
    /// Creates a calendar view over `config`.
    pub fn new(config: &'a SlaConfig) -> Self {
        Self { config }
    }

    /// The fixed offset every calculation on this calendar runs in.
    pub fn offset(&self) -> FixedOffset {
        *self.config.start_time.offset()
    }

    /// Returns true if the weekday of `date` is one of the valid days.
    pub fn is_valid_day(&self, date: NaiveDate) -> bool {
        self.config.valid_days.contains(&date.weekday())
    }

    /// Returns true if the hour of `t` is inside the business window.
    pub fn is_within_business_hours(&self, t: NaiveDateTime) -> bool {
        self.config.business_hours.contains_hour(t.hour())
    }

    /// Returns true if `date` is a listed holiday and holidays are honoured.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        !self.config.ignore_holidays && self.config.holidays.contains(&date)
    }

    /// A valid weekday that is not a holiday.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        self.is_valid_day(date) && !self.is_holiday(date)
    }

    /// Returns true if business time accrues during the hour starting at `t`.
    pub fn is_business_slot(&self, t: NaiveDateTime) -> bool {
        self.is_business_day(t.date()) && self.is_within_business_hours(t)
    }

    /// Moves to the opening hour of the first business day after `t`'s date.
    ///
    /// Never returns a time on `t`'s own date. Loops forever when no weekday
    /// is valid, which [`SlaConfig::validate`] rules out.
    pub fn next_business_day(&self, t: NaiveDateTime) -> EngineResult<NaiveDateTime> {
        let opening = self.config.business_hours.opening_time()?;
        let next_date = t
            .date()
            .succ_opt()
            .ok_or_else(|| out_of_range(t))?;

        let mut candidate = next_date.and_time(opening);
        while !self.is_business_day(candidate.date()) {
            candidate += Duration::hours(24);
        }
        Ok(candidate)
    }

    /// Moves `t` to the start of the business period it is in or before.
    ///
    /// A time inside a business slot is returned unchanged. A time before
    /// opening on a business day moves to that day's opening; anything else
    /// moves to [`next_business_day`](Self::next_business_day).
    pub fn next_business_opening(&self, t: NaiveDateTime) -> EngineResult<NaiveDateTime> {
        if self.is_business_slot(t) {
            return Ok(t);
        }

        let opening = t.date().and_time(self.config.business_hours.opening_time()?);
        if t < opening && self.is_business_day(t.date()) {
            return Ok(opening);
        }
        self.next_business_day(t)
    }

    /// The local time at which business time stops accruing on `t`'s date.
    pub fn closing_time(&self, t: NaiveDateTime) -> NaiveDateTime {
        t.date().and_time(NaiveTime::MIN) + self.config.business_hours.closing_offset()
    }

    /// Expresses `t` as local time in the calendar's offset.
    pub fn to_local(&self, t: DateTime<FixedOffset>) -> NaiveDateTime {
        t.with_timezone(&self.offset()).naive_local()
    }

    /// Attaches the calendar's offset to a local time.
    pub fn localize(&self, t: NaiveDateTime) -> EngineResult<DateTime<FixedOffset>> {
        t.and_local_timezone(self.offset())
            .single()
            .ok_or_else(|| out_of_range(t))
    }
}

fn out_of_range(t: NaiveDateTime) -> EngineError {
    EngineError::CalculationError {
        message: format!("local time {} cannot be represented", t),
    }
}
