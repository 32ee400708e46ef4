//! Driftbox Common Library
//!
//! Shared types and utilities for the Driftbox file sharing client.

pub mod api;
pub mod time;
pub mod validators;

/// HTTP status code the server uses to signal an invalid or expired session.
///
/// Any response with this status means the bearer token is no longer accepted
/// and the client must discard it and return to the login screen.
pub const STATUS_SESSION_INVALID: u16 = 498;

/// Multipart form field name the server expects for file uploads
pub const UPLOAD_FIELD_NAME: &str = "files";

/// Default server URL for form fields and first-run configuration
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_invalid_status() {
        // Verify the reserved session-invalid status is the expected value
        assert_eq!(STATUS_SESSION_INVALID, 498);
    }

    #[test]
    fn test_upload_field_name() {
        assert_eq!(UPLOAD_FIELD_NAME, "files");
    }

    #[test]
    fn test_default_server_url_has_no_trailing_slash() {
        // Request paths are joined with a leading slash
        assert!(!DEFAULT_SERVER_URL.ends_with('/'));
    }
}
