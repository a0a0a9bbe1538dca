//! Core data models for the SLA engine.
//!
//! This module contains the SLA configuration, the reusable policy it is
//! usually built from, and the result reported for a query instant.

mod duration_unit;
mod policy;
mod sla;
mod sla_result;

pub use duration_unit::DurationUnit;
pub use policy::SlaPolicy;
pub use sla::{BusinessHours, MAX_BUDGET_HOURS, SlaConfig};
pub use sla_result::SlaResult;
