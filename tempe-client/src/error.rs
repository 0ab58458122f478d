//! Client error types

use std::collections::HashMap;

use serde_json::Value;
use shared::ErrorBody;
use thiserror::Error;

/// Shown when the server gave no usable message
pub const GENERIC_FAILURE: &str = "Terjadi kesalahan, silakan coba lagi";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error body
    #[error("API error {code} ({status}): {}", detail.as_deref().unwrap_or(message))]
    Api {
        status: u16,
        code: u16,
        message: String,
        detail: Option<String>,
        details: Option<HashMap<String, Value>>,
    },

    /// Non-success status without a readable error body
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// No session; log in first
    #[error("Not logged in")]
    NotLoggedIn,

    /// Session file could not be read or written
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub(crate) fn from_body(status: u16, body: ErrorBody) -> Self {
        Self::Api {
            status,
            code: body.code,
            message: body.message,
            detail: body.detail,
            details: body.details,
        }
    }

    /// Text for the user: the server's `detail` verbatim, else a generic line
    pub fn user_message(&self) -> &str {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.as_str(),
            Self::Api { message, .. } if !message.is_empty() => message.as_str(),
            Self::NotLoggedIn => "Silakan login terlebih dahulu",
            _ => GENERIC_FAILURE,
        }
    }

    /// Error code sent by the server, if any
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. } | Self::Status { status: 401, .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api(detail: Option<&str>) -> ClientError {
        ClientError::Api {
            status: 422,
            code: 3002,
            message: "Stok tidak mencukupi".into(),
            detail: detail.map(Into::into),
            details: None,
        }
    }

    #[test]
    fn detail_is_shown_verbatim() {
        let err = api(Some("Stok tempe 5k tidak mencukupi: diminta 6 pcs, tersisa 5 pcs"));
        assert_eq!(
            err.user_message(),
            "Stok tempe 5k tidak mencukupi: diminta 6 pcs, tersisa 5 pcs"
        );
        assert_eq!(err.code(), Some(3002));
    }

    #[test]
    fn falls_back_to_message_then_generic() {
        assert_eq!(api(None).user_message(), "Stok tidak mencukupi");
        let err = ClientError::Status {
            status: 502,
            body: "<html>".into(),
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE);
        assert!(err.code().is_none());
    }

    #[test]
    fn unauthorized_from_either_shape() {
        let err = ClientError::Status {
            status: 401,
            body: String::new(),
        };
        assert!(err.is_unauthorized());
        assert!(!api(None).is_unauthorized());
    }
}
