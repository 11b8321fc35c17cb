//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tienda Admin                           │
//! │                                                                         │
//! │  POST /products/update                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<Redirect, ErrorPage>                                     │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Form invalid? ─── ValidationError ──────────────┐              │  │
//! │  │         │                                        │              │  │
//! │  │         ▼                                        ▼              │  │
//! │  │  Write failed? ─── DbError ──────────────────► ApiError ──────► │  │
//! │  │         │                                  (code + status)      │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ─── 303 See Other → listing page                       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Form handlers render ApiError as an HTML page (ErrorPage).            │
//! │  /api handlers render it as JSON: {"code": "...", "message": "..."}    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tienda_core::ValidationError;
use tienda_db::DbError;
use tracing::{debug, error, warn};

use crate::views;

/// Error returned from HTTP handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message, safe to show to staff
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400)
    ValidationError,

    /// Resource not found (404)
    NotFound,

    /// Row changed since it was read (409)
    Conflict,

    /// Brand or category id does not exist (422)
    InvalidReference,

    /// Database unreachable (503)
    Unavailable,

    /// Statement failed (500)
    DatabaseError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::InvalidReference => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::DatabaseError | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            DbError::VersionConflict { entity, id, expected } => ApiError::new(
                ErrorCode::Conflict,
                format!(
                    "{} {} was changed by someone else (expected version {}); reload and try again",
                    entity, id, expected
                ),
            ),
            DbError::ForeignKeyViolation { message } => {
                warn!("Foreign key violation: {}", message);
                ApiError::new(ErrorCode::InvalidReference, "Brand or category does not exist")
            }
            DbError::ConstraintViolation { message } => {
                warn!("Constraint violation: {}", message);
                ApiError::validation("Value rejected by the database")
            }
            DbError::ConnectionFailed(e) => {
                error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::Unavailable, "Database connection failed")
            }
            DbError::PoolExhausted => {
                error!("Database pool exhausted");
                ApiError::new(ErrorCode::Unavailable, "Database is busy, try again")
            }
            DbError::MigrationFailed(e) => {
                error!("Migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::Internal(e) => {
                error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::Internal, "Database operation failed")
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        debug!(field = err.field(), "Form field rejected");
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// JSON rendering, used by the `/api` endpoints.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

// =============================================================================
// HTML Error Page
// =============================================================================

/// An [`ApiError`] rendered as an HTML page, for form handlers.
///
/// No redirect is issued on failure; staff see the message and a link back.
#[derive(Debug)]
pub struct ErrorPage(pub ApiError);

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let status = self.0.status();
        warn!(status = status.as_u16(), code = ?self.0.code, message = %self.0.message, "Write not saved");
        (status, Html(views::error_page(&self.0))).into_response()
    }
}

impl From<DbError> for ErrorPage {
    fn from(err: DbError) -> Self {
        ErrorPage(err.into())
    }
}

impl From<ValidationError> for ErrorPage {
    fn from(err: ValidationError) -> Self {
        ErrorPage(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_status_mapping() {
        let cases = [
            (DbError::not_found("Product", 9), StatusCode::NOT_FOUND),
            (DbError::version_conflict("Product", 9, 2), StatusCode::CONFLICT),
            (
                DbError::ForeignKeyViolation { message: "FOREIGN KEY constraint failed".into() },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DbError::ConstraintViolation { message: "CHECK constraint failed".into() },
                StatusCode::BAD_REQUEST,
            ),
            (DbError::ConnectionFailed("gone".into()), StatusCode::SERVICE_UNAVAILABLE),
            (DbError::PoolExhausted, StatusCode::SERVICE_UNAVAILABLE),
            (DbError::QueryFailed("syntax".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (DbError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let err = ApiError::from(DbError::QueryFailed("near \"FROM\": syntax error".into()));
        assert!(!err.message.contains("syntax"));
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = ApiError::from(ValidationError::Required { field: "description".into() });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message.contains("description"));
    }

    #[test]
    fn test_serializes_screaming_code() {
        let json = serde_json::to_value(ApiError::not_found("Brand", 3)).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Brand not found: 3");
    }
}
