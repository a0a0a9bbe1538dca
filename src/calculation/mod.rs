//! Calculation logic for the SLA engine.
//!
//! This module contains the business calendar shared by every calculation,
//! the hour-stepping deadline calculation, the business-time-remaining walk,
//! duration formatting, and assembly of the final [`SlaResult`].
//!
//! All functions are pure: they read an [`SlaConfig`] and never mutate it,
//! so concurrent calls need no synchronization.
//!
//! [`SlaResult`]: crate::models::SlaResult
//! [`SlaConfig`]: crate::models::SlaConfig

mod calendar;
mod check;
mod deadline;
mod format;
mod working_time;

pub use calendar::BusinessCalendar;
pub use check::{compute_result, is_within_sla};
pub use deadline::compute_deadline;
pub use format::format_duration;
pub use working_time::compute_working_time;
