//! Error types and the JSON error body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the workspace, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending field, requested vs available, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    pub fn invalid_token() -> Self {
        Self::new(ErrorCode::TokenInvalid)
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, msg)
    }

    /// Whether the error is a server-side failure that must not leak its message
    pub fn is_system(&self) -> bool {
        self.code.category() == ErrorCategory::System
    }
}

/// JSON body of every error response
///
/// `detail` repeats `message`: pages surface `detail` verbatim when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ErrorBody {
    /// Text to show the user: `detail` when present, else `message`
    pub fn display_message(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.message)
    }
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        // System errors are masked; the real message only goes to the log.
        let message = if err.is_system() {
            err.code.message().to_string()
        } else {
            err.message.clone()
        };
        Self {
            code: err.code.code(),
            detail: Some(message.clone()),
            message,
            details: if err.is_system() {
                None
            } else {
                err.details.clone()
            },
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorBody::from(&self);

        if self.is_system() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::SaleNotFound);
        assert_eq!(err.code, ErrorCode::SaleNotFound);
        assert_eq!(err.message, "Penjualan tidak ditemukan");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::new(ErrorCode::InsufficientStock)
            .with_detail("variant", "3k")
            .with_detail("available", 4);

        let details = err.details.unwrap();
        assert_eq!(details.get("variant").unwrap(), "3k");
        assert_eq!(details.get("available").unwrap(), 4);
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(
            AppError::invalid_credentials().http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::conflict("x").http_status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::database("disk full").code,
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn test_error_body_carries_detail() {
        let err = AppError::with_message(ErrorCode::InsufficientStock, "Stok 3k tersisa 2 pcs");
        let body = ErrorBody::from(&err);
        assert_eq!(body.code, 3002);
        assert_eq!(body.detail.as_deref(), Some("Stok 3k tersisa 2 pcs"));
        assert_eq!(body.display_message(), "Stok 3k tersisa 2 pcs");
    }

    #[test]
    fn test_error_body_masks_system_errors() {
        let err = AppError::database("no such table: gaji").with_detail("sql", "SELECT");
        let body = ErrorBody::from(&err);
        assert_eq!(body.message, "Database error");
        assert_eq!(body.detail.as_deref(), Some("Database error"));
        assert!(body.details.is_none());
    }

    #[test]
    fn test_error_body_without_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"code":3,"message":"gone"}"#).unwrap();
        assert!(body.detail.is_none());
        assert_eq!(body.display_message(), "gone");
    }

    #[test]
    fn test_error_body_serialize() {
        let body = ErrorBody::from(&AppError::new(ErrorCode::EmptySale));
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"code\":3003"));
        assert!(json.contains("\"detail\":\"Jumlah tempe belum diisi\""));
        assert!(!json.contains("details"));
    }
}
