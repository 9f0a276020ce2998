// Error handling types for the API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::messages::{self, Locale};
use crate::validation::{EntityKind, ValidationFailure, ValidationOutcome};

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Unknown route. Missing records use [`not_found_response`] instead.
    NotFound(String),
    InternalServer(String),
    DatabaseError(sqlx::Error),
    /// Rendered validation failures (field checks or a rejected action).
    Validation {
        message: String,
        code: &'static str,
        errors: Vec<FailureDetail>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
            ApiError::Validation { message, errors, .. } => {
                write!(f, "{}: {} error(s)", message, errors.len())
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::DatabaseError(e)
    }
}

/// One rendered failure in an error body
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FailureDetail {
    pub code: &'static str,
    pub message: String,
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FailureDetail>,
}

/// Body for the not-found outcome, which is returned with a 200 status
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, code, errors) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST", Vec::new()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND", Vec::new()),
            ApiError::InternalServer(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                "INTERNAL_SERVER_ERROR",
                Vec::new(),
            ),
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database operation failed".to_string(),
                    "DATABASE_ERROR",
                    Vec::new(),
                )
            }
            ApiError::Validation {
                message,
                code,
                errors,
            } => (StatusCode::BAD_REQUEST, message, code, errors),
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
            errors,
        };

        (status, Json(error_response)).into_response()
    }
}

impl ApiError {
    /// Builds the 400 error for a failed or rejected outcome.
    pub fn from_failures(failures: &[ValidationFailure], locale: Locale) -> Self {
        let errors: Vec<FailureDetail> = failures
            .iter()
            .map(|f| FailureDetail {
                code: f.code.as_str(),
                message: messages::render_failure(f, locale),
            })
            .collect();

        ApiError::Validation {
            message: messages::validation_failed(locale),
            code: "VALIDATION_FAILED",
            errors,
        }
    }

    fn action_invalid(failure: &ValidationFailure, locale: Locale) -> Self {
        let message = messages::render_failure(failure, locale);
        ApiError::Validation {
            errors: vec![FailureDetail {
                code: failure.code.as_str(),
                message: message.clone(),
            }],
            message,
            code: "ACTION_INVALID",
        }
    }
}

/// 200 response carrying the "not found" message.
pub fn not_found_response(kind: EntityKind, id: i64, locale: Locale) -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: messages::not_found(kind, id, locale),
        }),
    )
        .into_response()
}

/// Translates a non-valid outcome into its response.
///
/// Returns `Ok(None)` for `Valid` so the handler can continue. A missing
/// subject is answered with 200 and a message body, not 404; clients depend
/// on that status.
pub fn reject_outcome(
    outcome: ValidationOutcome,
    locale: Locale,
) -> Result<Option<Response>, ApiError> {
    match outcome {
        ValidationOutcome::Valid => Ok(None),
        ValidationOutcome::NotFound { kind, id } => Ok(Some(not_found_response(kind, id, locale))),
        ValidationOutcome::ActionInvalid(action) => Err(ApiError::action_invalid(
            &ValidationFailure::action_invalid(action),
            locale,
        )),
        ValidationOutcome::Failed(failures) => Err(ApiError::from_failures(&failures, locale)),
    }
}
