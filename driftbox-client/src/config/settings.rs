//! User preference settings

use driftbox_common::DEFAULT_SERVER_URL;

use crate::style::{WINDOW_HEIGHT, WINDOW_WIDTH};

use super::theme::ThemePreference;

/// User preferences for the application
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Base URL of the Driftbox server
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Download location for files
    /// Defaults to system downloads directory if not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_path: Option<String>,

    /// UI theme preference
    #[serde(default)]
    pub theme: ThemePreference,

    /// Window width in pixels
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Window height in pixels
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Window X position (None = system default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_x: Option<i32>,

    /// Window Y position (None = system default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_y: Option<i32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            download_path: None,
            theme: ThemePreference::default(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            window_x: None,
            window_y: None,
        }
    }
}

impl Settings {
    /// Server base URL with any trailing slashes removed
    ///
    /// Request paths are joined with a leading slash, so a trailing slash in
    /// the configured URL would produce double slashes.
    pub fn server_base(&self) -> String {
        self.server_url.trim_end_matches('/').to_string()
    }
}

/// Get the default download directory path
///
/// Returns the system downloads directory, or None if it cannot be determined.
pub fn default_download_path() -> Option<String> {
    dirs::download_dir().map(|p| p.to_string_lossy().into_owned())
}

// =============================================================================
// Default Functions (for serde)
// =============================================================================

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_window_width() -> f32 {
    WINDOW_WIDTH
}

fn default_window_height() -> f32 {
    WINDOW_HEIGHT
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert!(settings.download_path.is_none());
        assert_eq!(settings.theme, ThemePreference::default());
        assert_eq!(settings.window_width, WINDOW_WIDTH);
        assert_eq!(settings.window_height, WINDOW_HEIGHT);
        assert!(settings.window_x.is_none());
        assert!(settings.window_y.is_none());
    }

    #[test]
    fn test_server_base_strips_trailing_slash() {
        let settings = Settings {
            server_url: "http://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.server_base(), "http://example.com");

        let settings = Settings {
            server_url: "http://example.com///".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.server_base(), "http://example.com");
    }

    #[test]
    fn test_server_base_leaves_clean_url() {
        let settings = Settings::default();
        assert_eq!(settings.server_base(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_default_download_path() {
        // Just verify it doesn't panic - actual path depends on system
        let _path = default_download_path();
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = Settings {
            server_url: "https://files.example.com".to_string(),
            download_path: Some("/home/user/Downloads".to_string()),
            window_x: Some(50),
            window_y: Some(80),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).expect("serialize");
        let deserialized: Settings = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(settings.server_url, deserialized.server_url);
        assert_eq!(settings.download_path, deserialized.download_path);
        assert_eq!(settings.theme, deserialized.theme);
        assert_eq!(settings.window_x, deserialized.window_x);
        assert_eq!(settings.window_y, deserialized.window_y);
    }

    #[test]
    fn test_settings_deserialize_empty_object() {
        // Missing fields fall back to defaults
        let settings: Settings = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert_eq!(settings.window_width, WINDOW_WIDTH);
    }
}
