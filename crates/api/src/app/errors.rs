//! Consistent error responses.
//!
//! Every handler returns `Result<_, ApiError>`. Validation-class failures are
//! rendered by [`ValidationFailure`] as `400` + a bare JSON array of strings,
//! whichever endpoint produced them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use brewery_beers::StoreError;
use brewery_core::{BeerId, ConstraintViolation};

const FALLBACK_MESSAGE: &str = "request: validation failed";

/// Collected constraint violations for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<ConstraintViolation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<ConstraintViolation>) -> Self {
        Self { violations }
    }

    /// Failure with one violation and no rejected value.
    pub fn single(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![ConstraintViolation {
            property_path: property_path.into(),
            message: message.into(),
            invalid_value: None,
        }])
    }

    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// One `"<path>: <message>"` line per violation, never empty.
    pub fn messages(&self) -> Vec<String> {
        if self.violations.is_empty() {
            return vec![FALLBACK_MESSAGE.to_string()];
        }
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<ConstraintViolation>> for ValidationFailure {
    fn from(violations: Vec<ConstraintViolation>) -> Self {
        Self::new(violations)
    }
}

impl IntoResponse for ValidationFailure {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, axum::Json(self.messages())).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(ValidationFailure),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("invalid beer id: {0}")]
    InvalidId(String),

    #[error("beer {0} not found")]
    NotFound(BeerId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ValidationFailure> for ApiError {
    fn from(value: ValidationFailure) -> Self {
        Self::Validation(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(failure) => failure.into_response(),
            ApiError::MalformedBody(reason) => ValidationFailure::single("body", reason).into_response(),
            ApiError::InvalidId(_) => {
                ValidationFailure::single("beerId", "must be a valid UUID").into_response()
            }
            ApiError::NotFound(id) => {
                json_error(StatusCode::NOT_FOUND, "not_found", format!("beer {id} not found"))
            }
            ApiError::Store(e) => {
                tracing::error!(error = %e, "beer store failure");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
            }
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
