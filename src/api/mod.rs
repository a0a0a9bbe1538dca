//! HTTP API module for the SLA checker.
//!
//! This module provides the REST API endpoints for evaluating SLA policies
//! against a start time and a query instant.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CheckRequest, PolicySelector};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
