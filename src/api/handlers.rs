//! HTTP request handlers for the SLA checker API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Datelike, Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_deadline, compute_result};
use crate::error::EngineResult;
use crate::models::{SlaPolicy, SlaResult};

use super::request::{CheckRequest, PolicySelector};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/check", post(check_handler))
        .route("/policies", get(policies_handler))
        .with_state(state)
}

/// Handler for POST /check endpoint.
///
/// Accepts a check request and returns the SLA status at the requested
/// instant.
async fn check_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing SLA check request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let started = Instant::now();
    match perform_check(&state, request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                deadline = %result.deadline,
                within_sla = result.is_within_sla,
                duration_us = started.elapsed().as_micros(),
                "SLA check completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "SLA check failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /policies endpoint.
///
/// Lists the configured policies by name.
async fn policies_handler(State(state): State<AppState>) -> impl IntoResponse {
    let policies: BTreeMap<&str, &SlaPolicy> = state
        .config()
        .config()
        .policies()
        .iter()
        .map(|(name, policy)| (name.as_str(), policy))
        .collect();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(policies),
    )
        .into_response()
}

/// Resolves the policy, gathers holidays and evaluates the SLA.
///
/// Holidays for the policy's country are looked up for the start year first.
/// The following year is only fetched when the deadline spills into it, and
/// the deadline is recomputed with the extra dates until it settles.
fn perform_check(state: &AppState, request: CheckRequest) -> EngineResult<SlaResult> {
    let policy = match request.policy {
        PolicySelector::Named(name) => state.config().get_policy(&name)?.clone(),
        PolicySelector::Inline(policy) => policy,
    };
    policy.validate()?;

    let mut config = policy.to_config(request.start_time, request.holidays);
    let country = policy
        .holiday_country
        .as_deref()
        .filter(|_| policy.needs_holidays());
    if let Some(country) = country {
        let mut year = request.start_time.year();
        config
            .holidays
            .extend(state.holidays().fetch_holidays(year, country)?);

        loop {
            // The deadline closes the hour before it, which is where the
            // walk last looked at the calendar.
            let last_hour = compute_deadline(&config)? - Duration::hours(1);
            if last_hour.year() <= year {
                break;
            }
            year += 1;
            config
                .holidays
                .extend(state.holidays().fetch_holidays(year, country)?);
        }
    }

    let now = request.now.unwrap_or_else(|| Utc::now().fixed_offset());
    compute_result(&config, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::error::EngineError;
    use crate::holidays::{HolidaySource, StaticHolidaySource};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    /// A holiday source whose upstream is always down.
    struct UnavailableSource;

    impl HolidaySource for UnavailableSource {
        fn fetch_holidays(&self, _year: i32, _country_code: &str) -> EngineResult<Vec<NaiveDate>> {
            Err(EngineError::HolidaySource {
                message: "status code 503".to_string(),
            })
        }
    }

    async fn post_check(router: Router, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/check")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_named_policy_returns_200() {
        let router = create_router(create_test_state());

        let body = r#"{
            "policy": "standard",
            "start_time": "2024-08-30T16:00:00Z",
            "now": "2024-08-30T17:00:00Z"
        }"#;
        let (status, body) = post_check(router, body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let result: SlaResult = serde_json::from_slice(&body).unwrap();
        assert!(result.is_within_sla);
        assert_eq!(result.deadline.to_rfc3339(), "2024-09-02T12:00:00+00:00");
        assert_eq!(result.remaining, "67:00:00");
        assert_eq!(result.overage, "00:00:00");
        assert_eq!(result.working_time_remaining, "03:00:00");
    }

    #[tokio::test]
    async fn test_configured_holidays_are_applied() {
        let router = create_router(create_test_state());

        // 2024-08-26 is a GB bank holiday, so the last three hours land on Tuesday.
        let body = r#"{
            "policy": "standard",
            "start_time": "2024-08-23T16:00:00Z",
            "now": "2024-08-23T16:00:00Z"
        }"#;
        let (status, body) = post_check(router, body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let result: SlaResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.deadline.to_rfc3339(), "2024-08-27T12:00:00+00:00");
    }

    #[tokio::test]
    async fn test_inline_policy_with_request_holidays() {
        let router = create_router(create_test_state());

        let body = r#"{
            "policy": {
                "duration_amount": 2,
                "duration_unit": "hours",
                "business_hours": {"start_hour": 9, "end_hour": 17},
                "valid_days": ["Mon", "Tue", "Wed", "Thu", "Fri"]
            },
            "start_time": "2024-09-06T16:00:00Z",
            "now": "2024-09-10T10:00:00Z",
            "holidays": ["2024-09-09"]
        }"#;
        let (status, body) = post_check(router, body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let result: SlaResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.deadline.to_rfc3339(), "2024-09-10T10:00:00+00:00");
        assert!(!result.is_within_sla);
        assert_eq!(result.working_time_remaining, "00:00:00");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = post_check(router, "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_start_time_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = post_check(router, r#"{"policy": "standard"}"#.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("start_time"));
    }

    #[tokio::test]
    async fn test_unknown_policy_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{"policy": "platinum", "start_time": "2024-08-30T16:00:00Z"}"#;
        let (status, body) = post_check(router, body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "POLICY_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unknown_duration_unit_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "policy": {
                "duration_amount": 1,
                "duration_unit": "weeks",
                "business_hours": {"start_hour": 9, "end_hour": 17},
                "valid_days": ["Mon"]
            },
            "start_time": "2024-08-30T16:00:00Z"
        }"#;
        let (status, body) = post_check(router, body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_DURATION_UNIT");
    }

    #[tokio::test]
    async fn test_empty_valid_days_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "policy": {
                "duration_amount": 1,
                "duration_unit": "hours",
                "business_hours": {"start_hour": 9, "end_hour": 17},
                "valid_days": []
            },
            "start_time": "2024-08-30T16:00:00Z"
        }"#;
        let (status, body) = post_check(router, body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_CONFIG");
    }

    #[tokio::test]
    async fn test_holiday_source_failure_returns_502() {
        let config = ConfigLoader::load("./config/default").unwrap();
        let state = AppState::with_holiday_source(config, Arc::new(UnavailableSource));
        let router = create_router(state);

        let body = r#"{"policy": "standard", "start_time": "2024-08-30T16:00:00Z"}"#;
        let (status, body) = post_check(router, body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "HOLIDAY_SOURCE_ERROR");
    }

    #[tokio::test]
    async fn test_following_year_fetched_only_when_reached() {
        let mut source = StaticHolidaySource::new();
        source.insert("GB", 2024, vec![NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()]);
        let config = ConfigLoader::load("./config/default").unwrap();
        let state = AppState::with_holiday_source(config, Arc::new(source));
        let router = create_router(state);

        // No 2025 calendar is needed while the deadline stays in 2024
        let body = r#"{
            "policy": "standard",
            "start_time": "2024-12-24T15:00:00Z",
            "now": "2024-12-24T15:00:00Z"
        }"#;
        let (status, body) = post_check(router.clone(), body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        let result: SlaResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.deadline.to_rfc3339(), "2024-12-26T11:00:00+00:00");

        // Crossing New Year asks for 2025, which this source lacks
        let body = r#"{"policy": "standard", "start_time": "2024-12-31T16:00:00Z"}"#;
        let (status, _) = post_check(router, body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_ignore_holidays_skips_holiday_source() {
        let config = ConfigLoader::load("./config/default").unwrap();
        let state = AppState::with_holiday_source(config, Arc::new(UnavailableSource));
        let router = create_router(state);

        let body = r#"{
            "policy": "around_the_clock",
            "start_time": "2024-12-25T10:00:00Z",
            "now": "2024-12-25T11:00:00Z"
        }"#;
        let (status, body) = post_check(router, body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let result: SlaResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.deadline.to_rfc3339(), "2024-12-25T14:00:00+00:00");
        assert_eq!(result.working_time_remaining, "03:00:00");
    }

    #[tokio::test]
    async fn test_list_policies() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/policies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let policies: BTreeMap<String, SlaPolicy> = serde_json::from_slice(&body).unwrap();
        assert_eq!(policies.len(), 4);
        assert_eq!(policies["standard"].duration_amount, 4);
    }
}
