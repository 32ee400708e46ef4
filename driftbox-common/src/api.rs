//! Wire types for the Driftbox REST API
//!
//! Request and response bodies exchanged with the server. Deserialization is
//! deliberately tolerant: servers of different vintages name the file
//! identifier differently (`id`, `file_id`, or `fileId`) and may omit fields,
//! so every field a listing row needs carries a default.

use serde::{Deserialize, Serialize};

// =============================================================================
// Requests
// =============================================================================

/// Body for `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

/// Body for `POST /signup` (admin-created accounts)
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    /// Username for the new account
    pub username: String,
    /// Password for the new account
    pub password: String,
    /// Whether the new account gets admin rights
    pub is_admin: bool,
}

/// Body for `PUT /reset-password`
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    /// Current password (verified server-side)
    pub current_password: String,
    /// Replacement password
    pub new_password: String,
}

// =============================================================================
// Responses
// =============================================================================

/// Body of a successful `POST /login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub token: String,
}

/// Body of `GET /user-info`: the authenticated account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    /// Account identifier
    #[serde(default)]
    pub id: String,
    /// Account username
    pub username: String,
    /// Whether the account has admin rights
    #[serde(default)]
    pub is_admin: bool,
}

/// One entry of `GET /users` (admin only)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Account identifier (used for `DELETE /users/{id}`)
    pub id: String,
    /// Account username
    pub username: String,
    /// Whether the account has admin rights
    #[serde(default)]
    pub is_admin: bool,
}

/// Error body the server attaches to failed requests: `{"error": "..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub error: String,
}

// =============================================================================
// File records
// =============================================================================

/// One entry of `GET /files`
///
/// The identifier field varies across server versions. [`FileRecord::resolved_id`]
/// applies the fallback chain `id` -> `file_id` -> `fileId` -> `filename` and
/// is the only way row actions should obtain an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Primary identifier (newer servers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Snake-case identifier (older servers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,

    /// Camel-case identifier (transitional servers)
    #[serde(default, rename = "fileId", skip_serializing_if = "Option::is_none")]
    pub file_id_camel: Option<String>,

    /// Original filename
    #[serde(default)]
    pub filename: String,

    /// File size in bytes
    #[serde(default)]
    pub size: u64,

    /// Upload timestamp (RFC 3339, as sent by the server)
    #[serde(default)]
    pub uploaded_at: String,

    /// Whether the file is in the shared collection
    #[serde(default)]
    pub is_public: bool,

    /// Username of the uploader (shared files only)
    #[serde(default)]
    pub uploaded_by: String,
}

impl FileRecord {
    /// Resolve the identifier used for download and delete requests.
    ///
    /// Tries `id`, then `file_id`, then `fileId`, then `filename`, skipping
    /// absent and empty values. Returns `None` only when no candidate is
    /// usable; callers render such rows without actions.
    pub fn resolved_id(&self) -> Option<&str> {
        for candidate in [
            self.id.as_deref(),
            self.file_id.as_deref(),
            self.file_id_camel.as_deref(),
            Some(self.filename.as_str()),
        ] {
            match candidate {
                Some(value) if !value.is_empty() => return Some(value),
                _ => continue,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_ids(
        id: Option<&str>,
        file_id: Option<&str>,
        file_id_camel: Option<&str>,
        filename: &str,
    ) -> FileRecord {
        FileRecord {
            id: id.map(String::from),
            file_id: file_id.map(String::from),
            file_id_camel: file_id_camel.map(String::from),
            filename: filename.to_string(),
            size: 0,
            uploaded_at: String::new(),
            is_public: false,
            uploaded_by: String::new(),
        }
    }

    // ========================================================================
    // Identity fallback chain
    // ========================================================================

    #[test]
    fn test_resolved_id_prefers_id() {
        let record = record_with_ids(Some("a"), Some("b"), Some("c"), "d.txt");
        assert_eq!(record.resolved_id(), Some("a"));
    }

    #[test]
    fn test_resolved_id_falls_back_to_file_id() {
        let record = record_with_ids(None, Some("b"), Some("c"), "d.txt");
        assert_eq!(record.resolved_id(), Some("b"));
    }

    #[test]
    fn test_resolved_id_falls_back_to_camel_case() {
        let record = record_with_ids(None, None, Some("c"), "d.txt");
        assert_eq!(record.resolved_id(), Some("c"));
    }

    #[test]
    fn test_resolved_id_falls_back_to_filename() {
        let record = record_with_ids(None, None, None, "d.txt");
        assert_eq!(record.resolved_id(), Some("d.txt"));
    }

    #[test]
    fn test_resolved_id_skips_empty_candidates() {
        // Empty strings are treated the same as absent fields
        let record = record_with_ids(Some(""), Some(""), None, "d.txt");
        assert_eq!(record.resolved_id(), Some("d.txt"));
    }

    #[test]
    fn test_resolved_id_none_when_nothing_usable() {
        let record = record_with_ids(None, Some(""), None, "");
        assert_eq!(record.resolved_id(), None);
    }

    // ========================================================================
    // Tolerant deserialization
    // ========================================================================

    #[test]
    fn test_file_record_minimal_json() {
        // Oldest servers send only filename/size/uploaded_at
        let json = r#"{"filename":"report.pdf","size":2048,"uploaded_at":"2026-01-15T10:30:00Z"}"#;
        let record: FileRecord = serde_json::from_str(json).expect("deserialize");

        assert_eq!(record.filename, "report.pdf");
        assert_eq!(record.size, 2048);
        assert!(record.id.is_none());
        assert!(record.file_id.is_none());
        assert!(!record.is_public);
        assert_eq!(record.resolved_id(), Some("report.pdf"));
    }

    #[test]
    fn test_file_record_camel_case_id() {
        let json = r#"{"fileId":"abc-123","filename":"notes.md","size":10}"#;
        let record: FileRecord = serde_json::from_str(json).expect("deserialize");

        assert_eq!(record.file_id_camel.as_deref(), Some("abc-123"));
        assert_eq!(record.resolved_id(), Some("abc-123"));
    }

    #[test]
    fn test_file_record_full_json() {
        let json = r#"{
            "id": "f1",
            "file_id": "f2",
            "fileId": "f3",
            "filename": "photo.jpg",
            "size": 123456,
            "uploaded_at": "2026-02-01T08:00:00Z",
            "is_public": true,
            "uploaded_by": "alice"
        }"#;
        let record: FileRecord = serde_json::from_str(json).expect("deserialize");

        assert_eq!(record.resolved_id(), Some("f1"));
        assert!(record.is_public);
        assert_eq!(record.uploaded_by, "alice");
    }

    #[test]
    fn test_file_record_empty_object() {
        // A completely empty object still deserializes, just without identity
        let record: FileRecord = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(record.resolved_id(), None);
    }

    // ========================================================================
    // Other wire types
    // ========================================================================

    #[test]
    fn test_login_request_serialization() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(json, r#"{"username":"alice","password":"secret"}"#);
    }

    #[test]
    fn test_signup_request_serialization() {
        let request = SignupRequest {
            username: "bob".to_string(),
            password: "password123".to_string(),
            is_admin: true,
        };
        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(
            json,
            r#"{"username":"bob","password":"password123","is_admin":true}"#
        );
    }

    #[test]
    fn test_reset_password_request_serialization() {
        let request = ResetPasswordRequest {
            current_password: "old".to_string(),
            new_password: "newpassword".to_string(),
        };
        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(
            json,
            r#"{"current_password":"old","new_password":"newpassword"}"#
        );
    }

    #[test]
    fn test_login_response_deserialization() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"jwt-token-here"}"#).expect("deserialize");
        assert_eq!(response.token, "jwt-token-here");
    }

    #[test]
    fn test_user_profile_deserialization() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":"u1","username":"alice","is_admin":true}"#)
                .expect("deserialize");
        assert_eq!(profile.id, "u1");
        assert_eq!(profile.username, "alice");
        assert!(profile.is_admin);
    }

    #[test]
    fn test_user_profile_defaults_admin_flag() {
        // is_admin omitted means a regular account
        let profile: UserProfile =
            serde_json::from_str(r#"{"username":"bob"}"#).expect("deserialize");
        assert!(!profile.is_admin);
        assert!(profile.id.is_empty());
    }

    #[test]
    fn test_user_record_deserialization() {
        let json = r#"[
            {"id":"u1","username":"alice","is_admin":true},
            {"id":"u2","username":"bob","is_admin":false}
        ]"#;
        let users: Vec<UserRecord> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert!(users[0].is_admin);
        assert!(!users[1].is_admin);
    }

    #[test]
    fn test_api_error_body_deserialization() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"Username already exists"}"#).expect("deserialize");
        assert_eq!(body.error, "Username already exists");
    }
}
