//! Configuration persistence
//!
//! Application settings are stored as pretty-printed JSON in the platform
//! config directory (e.g. `~/.config/driftbox/config.json` on Linux). The
//! session token lives in a separate file with tighter permissions, see
//! [`session`].

pub mod session;
pub mod settings;
pub mod theme;

pub use session::SessionStore;
pub use settings::Settings;
pub use theme::ThemePreference;

use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// Top-level persisted configuration
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// User-adjustable application settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Get the platform-specific config file path
    ///
    /// Returns None if the config directory cannot be determined.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from disk, or return defaults
    ///
    /// Returns default configuration if:
    /// - Config directory cannot be determined
    /// - Config file doesn't exist
    /// - Config file cannot be read
    /// - Config file contains invalid JSON
    ///
    /// Unknown fields are ignored and missing fields take their defaults, so
    /// files written by older or newer versions still load.
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            return Self::load_from(&path);
        }
        Self::default()
    }

    fn load_from(path: &PathBuf) -> Self {
        if path.exists()
            && let Ok(contents) = fs::read_to_string(path)
            && let Ok(config) = serde_json::from_str::<Config>(&contents)
        {
            return config;
        }
        Self::default()
    }

    /// Save configuration to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path =
            Self::config_path().ok_or_else(|| "Could not determine config directory".to_string())?;
        self.save_to(&path)
    }

    fn save_to(&self, path: &PathBuf) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write config file: {}", e))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_format() {
        if let Some(path) = Config::config_path() {
            assert!(
                path.ends_with("driftbox/config.json"),
                "Config path should end with driftbox/config.json, got: {:?}",
                path
            );
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.settings.server_url = "https://files.example.com".to_string();
        config.settings.window_width = 1024.0;
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.settings.server_url, "https://files.example.com");
        assert_eq!(loaded.settings.window_width, 1024.0);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("does-not-exist.json");

        let config = Config::load_from(&path);
        assert_eq!(config.settings.server_url, Settings::default().server_url);
    }

    #[test]
    fn test_load_corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ definitely not json").expect("write");

        let config = Config::load_from(&path);
        assert_eq!(config.settings.server_url, Settings::default().server_url);
    }

    #[test]
    fn test_load_ignores_unknown_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"settings":{"server_url":"http://box:9000","future_field":true}}"#,
        )
        .expect("write");

        let config = Config::load_from(&path);
        assert_eq!(config.settings.server_url, "http://box:9000");
    }

    #[test]
    fn test_saved_file_is_pretty_printed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        Config::default().save_to(&path).expect("save");

        let contents = std::fs::read_to_string(&path).expect("read");
        assert!(contents.contains('\n'), "Config should be pretty-printed");
    }
}
