//! Business-time SLA checker
//!
//! This crate computes SLA deadlines that only count time inside configured
//! business hours on valid weekdays, skipping public holidays, and reports
//! whether a given instant is within the SLA. It also provides a small
//! expiring cache used to memoize holiday calendars.

#![warn(missing_docs)]

pub mod api;
pub mod cache;
pub mod calculation;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
