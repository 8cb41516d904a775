//! Response types for the dashboard API.
//!
//! This module defines the error body returned by every JSON endpoint and
//! the health payload.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::refresh::CycleReport;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an error for a query string that could not be decoded.
    pub fn invalid_query(details: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_QUERY",
            "Query parameters could not be parsed",
            details,
        )
    }

    /// Creates an error for a dashboard cycle that did not complete.
    pub fn cycle_failed(details: impl Into<String>) -> Self {
        Self::with_details("CYCLE_FAILED", "Dashboard cycle failed", details)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response for a malformed query string.
    pub fn bad_query(details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::invalid_query(details),
        }
    }

    /// A 500 response for a cycle whose task failed.
    pub fn cycle_failed(details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::cycle_failed(details),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// The refresh loop's most recent report, absent before its first tick.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_refresh: Option<CycleReport>,
}

impl HealthResponse {
    /// The health payload for this build.
    pub fn ok(last_refresh: Option<CycleReport>) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            last_refresh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[tokio::test]
    async fn test_error_response_carries_status_and_json_body() {
        let response = ApiErrorResponse::bad_query("duplicate field `grade`").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_QUERY");
    }

    #[test]
    fn test_invalid_query_error() {
        let error = ApiError::invalid_query("duplicate field `grade`");
        assert_eq!(error.code, "INVALID_QUERY");
        assert_eq!(error.details.as_deref(), Some("duplicate field `grade`"));
    }

    #[test]
    fn test_cycle_failed_is_server_error() {
        let response = ApiErrorResponse::cycle_failed("task panicked");
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CYCLE_FAILED");
    }

    #[test]
    fn test_health_reports_version() {
        let health = HealthResponse::ok(None);
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));

        let json = serde_json::to_value(&health).unwrap();
        assert!(json.get("last_refresh").is_none());
    }
}
