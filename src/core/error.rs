//! Typed error handling for the loadboard API
//!
//! Every failure a lifecycle operation can produce is one of four kinds:
//!
//! - [`ApiError::Validation`]: one or more request fields violated a constraint
//! - [`ApiError::NotFound`]: an operation referenced an entity id that does not exist
//! - [`ApiError::BadRequest`]: the request is semantically illegal in the current
//!   state (e.g. booking against a cancelled load) or unreadable
//! - [`ApiError::Storage`] / [`ApiError::Internal`]: anything else
//!
//! All kinds propagate unrecovered to the HTTP boundary, where [`IntoResponse`]
//! maps each to a status code and a uniform JSON body:
//!
//! ```json
//! { "status": 404, "error": "Not Found", "message": "...", "path": "/load/..." }
//! ```
//!
//! Validation errors additionally carry an `errors` array with every violated
//! field message, not just the first.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::core::validation::FieldError;

/// The main error type for all lifecycle operations
#[derive(Debug)]
pub enum ApiError {
    /// Request field constraints were violated; carries every violation
    Validation(Vec<FieldError>),

    /// An entity lookup failed
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    /// Semantically illegal request (domain-rule violation) or unreadable body
    BadRequest(String),

    /// Storage backend failure
    Storage(String),

    /// Anything unclassified; never leaks internals beyond a message string
    Internal(String),
}

impl ApiError {
    /// Shorthand for the common id-lookup failure
    pub fn not_found(resource: &'static str, field: &'static str, value: impl ToString) -> Self {
        ApiError::NotFound {
            resource,
            field,
            value: value.to_string(),
        }
    }

    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the JSON error body. `path` is filled in later by the
    /// request-context middleware, which sees the request URI.
    pub fn to_body(&self) -> ErrorBody {
        let status = self.status_code();
        ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
            path: None,
            errors: match self {
                ApiError::Validation(violations) => {
                    Some(violations.iter().map(|v| v.message.clone()).collect())
                }
                _ => None,
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(_) => write!(f, "Validation failed"),
            ApiError::NotFound {
                resource,
                field,
                value,
            } => {
                write!(f, "{} not found with {}: '{}'", resource, field, value)
            }
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::Storage(msg) => write!(f, "Storage error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Store-trait failures are unclassified by contract
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.to_body())).into_response()
    }
}

// =============================================================================
// Error body
// =============================================================================

/// Wire representation of an error, shared by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// A specialized Result type for lifecycle operations
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Tests
// =============================================================================
