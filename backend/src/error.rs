//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use health_assessment_shared::types::{ErrorDetail, ErrorResponse, FieldError};
use health_assessment_shared::{AssessmentError, ValidationError};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<AssessmentError> for ApiError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::Validation(errors) => ApiError::Validation(errors),
            other => ApiError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match &self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "One or more fields are invalid".to_string(),
                errors.iter().map(FieldError::from).collect(),
            ),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), Vec::new())
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                fields,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::validation(ApiError::Validation(Vec::new()), StatusCode::BAD_REQUEST, "VALIDATION_ERROR")]
    #[case::bad_request(ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST, "BAD_REQUEST")]
    #[case::internal(
        ApiError::Internal(anyhow::anyhow!("boom")),
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR"
    )]
    #[tokio::test]
    async fn test_error_body_codes(
        #[case] error: ApiError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        let response = error.into_response();
        assert_eq!(response.status(), status);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], code);
    }

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation(vec![ValidationError::new("age", "Age is required")]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_error_status() {
        let error = ApiError::BadRequest("Query must not be empty".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_external_errors_become_internal() {
        let error = ApiError::from(AssessmentError::Timeout(5));
        assert!(matches!(error, ApiError::Internal(_)));
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_passes_through() {
        let error = ApiError::from(AssessmentError::Validation(vec![ValidationError::new(
            "name",
            "Name is required",
        )]));
        assert!(matches!(error, ApiError::Validation(ref v) if v.len() == 1));
    }
}
