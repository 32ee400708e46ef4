//! API error classification
//!
//! Every server interaction funnels its failure through [`ApiError`] so
//! handlers can react uniformly. Session expiry gets its own variant because
//! it is the one failure that must never surface as an ordinary error: it
//! forces a logout instead.

use std::fmt;

use driftbox_common::STATUS_SESSION_INVALID;

/// Errors that can occur during an API request
///
/// Clone and equality are derived because errors travel inside Iced messages
/// and are stored in panel state slots for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Server rejected the session token (reserved status 498)
    ///
    /// Handlers must treat this as a forced logout, never as a
    /// per-operation failure.
    SessionExpired,

    /// Server answered with a non-success status
    ///
    /// The message is the server-supplied `error` field when the body
    /// parses, otherwise a generic status description.
    Api { status: u16, message: String },

    /// Request never produced a server response (DNS, refused, timeout)
    Network(String),

    /// Local file I/O failed while preparing or finishing a transfer
    Io(String),
}

impl ApiError {
    /// Whether this error is the reserved session-invalid signal
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// Build an `Api` error from a status code and raw response body
    ///
    /// Prefers the `error` field of a JSON body; falls back to a generic
    /// message naming the status code. The reserved session-invalid status
    /// always maps to [`ApiError::SessionExpired`], whatever the body says.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == STATUS_SESSION_INVALID {
            return ApiError::SessionExpired;
        }
        let message = serde_json::from_str::<driftbox_common::api::ApiErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ApiError::Api { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::SessionExpired => write!(f, "Session expired. Please log in again."),
            ApiError::Api { message, .. } => f.write_str(message),
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Io(e) => write!(f, "File error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_parses_error_body() {
        let err = ApiError::from_response(409, r#"{"error":"Username already exists"}"#);
        assert_eq!(
            err,
            ApiError::Api {
                status: 409,
                message: "Username already exists".to_string()
            }
        );
    }

    #[test]
    fn test_from_response_unparseable_body_falls_back_to_status() {
        let err = ApiError::from_response(500, "<html>Internal Server Error</html>");
        assert_eq!(
            err,
            ApiError::Api {
                status: 500,
                message: "Request failed with status 500".to_string()
            }
        );
    }

    #[test]
    fn test_from_response_empty_error_field_falls_back() {
        let err = ApiError::from_response(400, r#"{"error":""}"#);
        assert_eq!(
            err,
            ApiError::Api {
                status: 400,
                message: "Request failed with status 400".to_string()
            }
        );
    }

    #[test]
    fn test_from_response_498_maps_to_session_expired() {
        let err = ApiError::from_response(498, r#"{"error":"token expired"}"#);
        assert_eq!(err, ApiError::SessionExpired);
        assert!(err.is_session_expired());
    }

    #[test]
    fn test_api_error_is_not_session_expired() {
        let err = ApiError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert!(!err.is_session_expired());
    }

    #[test]
    fn test_display_uses_server_message() {
        let err = ApiError::Api {
            status: 404,
            message: "File not found".to_string(),
        };
        assert_eq!(err.to_string(), "File not found");
    }

    #[test]
    fn test_display_session_expired_message() {
        assert_eq!(
            ApiError::SessionExpired.to_string(),
            "Session expired. Please log in again."
        );
    }

    #[test]
    fn test_display_network_error() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
