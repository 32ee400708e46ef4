//! Session token persistence
//!
//! Holds the bearer token issued by `POST /login` and persists it to
//! `session.json` next to `config.json`. The token is the only piece of
//! domain state the client keeps between runs. Presence of a token is the
//! sole authentication predicate; no local expiry checks are made.

use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, SESSION_FILE_NAME};

/// File permissions for the session file on Unix (owner read/write only)
#[cfg(unix)]
const SESSION_FILE_MODE: u32 = 0o600;

/// Persistent session file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SessionFile {
    /// Bearer token, absent when logged out
    token: Option<String>,
}

/// Stores the session token and mediates its persistence
///
/// Handlers never read the session file directly; they go through the token
/// accessors here. Policy reactions to a missing or rejected token (forced
/// logout, UI reset) live in the auth handlers, not in this store.
pub struct SessionStore {
    /// Current bearer token, if logged in
    token: Option<String>,

    /// Whether there are unsaved changes
    dirty: bool,
}

impl SessionStore {
    /// Create an empty, logged-out store
    pub fn new() -> Self {
        Self {
            token: None,
            dirty: false,
        }
    }

    /// Create a store holding a token without touching disk (for tests)
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            dirty: false,
        }
    }

    /// Get the platform-specific session file path
    ///
    /// Returns None if the config directory cannot be determined.
    pub fn session_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SESSION_FILE_NAME))
    }

    /// Load the session from disk, or return a logged-out store
    ///
    /// Returns a logged-out store if:
    /// - Config directory cannot be determined
    /// - Session file doesn't exist
    /// - Session file cannot be read
    /// - Session file contains invalid JSON
    pub fn load() -> Self {
        if let Some(path) = Self::session_path() {
            return Self::load_from(&path);
        }
        Self::new()
    }

    fn load_from(path: &PathBuf) -> Self {
        if path.exists()
            && let Ok(contents) = fs::read_to_string(path)
            && let Ok(file) = serde_json::from_str::<SessionFile>(&contents)
        {
            let token = file.token.filter(|t| !t.is_empty());
            return Self {
                token,
                dirty: false,
            };
        }
        Self::new()
    }

    /// Save the session to disk with restrictive permissions
    ///
    /// Creates the config directory if it doesn't exist. When logged out the
    /// session file is removed instead of written. On Unix systems the file
    /// is set to 0o600 (owner read/write only) to protect the token.
    ///
    /// Only saves if there are unsaved changes (dirty flag is set).
    pub fn save(&mut self) -> Result<(), String> {
        if !self.dirty {
            return Ok(());
        }

        let path =
            Self::session_path().ok_or_else(|| "Could not determine config directory".to_string())?;
        self.save_to(&path)?;
        self.dirty = false;
        Ok(())
    }

    fn save_to(&self, path: &PathBuf) -> Result<(), String> {
        let Some(token) = &self.token else {
            // Logged out: remove any stored token
            if path.exists() {
                fs::remove_file(path)
                    .map_err(|e| format!("Failed to remove session file: {}", e))?;
            }
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let file = SessionFile {
            token: Some(token.clone()),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| format!("Failed to serialize session: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write session file: {}", e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let metadata = fs::metadata(path)
                .map_err(|e| format!("Failed to read session file metadata: {}", e))?;
            let mut perms = metadata.permissions();
            perms.set_mode(SESSION_FILE_MODE);
            fs::set_permissions(path, perms)
                .map_err(|e| format!("Failed to set session file permissions: {}", e))?;
        }

        Ok(())
    }

    /// Current bearer token, if logged in
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store a new token (marks the store dirty; call `save` to persist)
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
        self.dirty = true;
    }

    /// Discard the token (marks the store dirty; call `save` to persist)
    pub fn clear(&mut self) {
        if self.token.is_some() {
            self.token = None;
            self.dirty = true;
        }
    }

    /// Check if there are unsaved changes
    #[cfg(test)]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug implementation to avoid logging the token
impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("dirty", &self.dirty)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_logged_out() {
        let store = SessionStore::new();
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_with_token() {
        let store = SessionStore::with_token("jwt-abc");
        assert_eq!(store.token(), Some("jwt-abc"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_set_token_marks_dirty() {
        let mut store = SessionStore::new();
        store.set_token("jwt-abc".to_string());
        assert!(store.is_dirty());
        assert_eq!(store.token(), Some("jwt-abc"));
    }

    #[test]
    fn test_clear_marks_dirty() {
        let mut store = SessionStore::with_token("jwt-abc");
        store.clear();
        assert!(store.is_dirty());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_clear_when_already_logged_out_is_noop() {
        let mut store = SessionStore::new();
        store.clear();
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_session_path_format() {
        if let Some(path) = SessionStore::session_path() {
            assert!(
                path.ends_with("driftbox/session.json"),
                "Session path should end with driftbox/session.json, got: {:?}",
                path
            );
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionStore::with_token("jwt-roundtrip");
        store.save_to(&path).expect("save");

        let loaded = SessionStore::load_from(&path);
        assert_eq!(loaded.token(), Some("jwt-roundtrip"));
        assert!(!loaded.is_dirty());
    }

    #[test]
    fn test_save_logged_out_removes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionStore::with_token("jwt-temp");
        store.save_to(&path).expect("save");
        assert!(path.exists());

        let mut cleared = SessionStore::with_token("jwt-temp");
        cleared.clear();
        cleared.save_to(&path).expect("save");
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file_returns_logged_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("does-not-exist.json");

        let store = SessionStore::load_from(&path);
        assert!(store.token().is_none());
    }

    #[test]
    fn test_load_corrupt_file_returns_logged_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").expect("write");

        let store = SessionStore::load_from(&path);
        assert!(store.token().is_none());
    }

    #[test]
    fn test_load_empty_token_treated_as_logged_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"token":""}"#).expect("write");

        let store = SessionStore::load_from(&path);
        assert!(store.token().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_restrictive_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionStore::with_token("jwt-perms");
        store.save_to(&path).expect("save");

        let mode = std::fs::metadata(&path)
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_debug_redacts_token() {
        let store = SessionStore::with_token("super-secret-token");
        let debug = format!("{:?}", store);
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("REDACTED"));
    }
}
