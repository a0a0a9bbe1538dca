//! Request types for the SLA checker API.
//!
//! This module defines the JSON request structures for the `/check` endpoint.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::SlaPolicy;

/// Request body for the `/check` endpoint.
///
/// Contains the policy to apply, when the SLA clock started and, optionally,
/// the instant to evaluate at (defaults to the current time).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The policy, by configured name or inline.
    pub policy: PolicySelector,
    /// The instant the SLA clock started.
    pub start_time: DateTime<FixedOffset>,
    /// The instant to evaluate the SLA at.
    #[serde(default)]
    pub now: Option<DateTime<FixedOffset>>,
    /// Extra non-working dates on top of the policy's country calendar.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
}

/// Selects the SLA policy for a check.
///
/// A JSON string names a configured policy; a JSON object is an inline
/// policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicySelector {
    /// A policy from the loaded configuration.
    Named(String),
    /// A policy sent with the request.
    Inline(SlaPolicy),
}
