//! Application-wide constants
//!
//! Shared constants used across multiple modules.

/// Application name shown in the toolbar and window title
pub const APP_NAME: &str = "Driftbox";

/// Application directory name (used in config directory path)
pub const APP_DIR_NAME: &str = "driftbox";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Session file name (holds the bearer token between runs)
pub const SESSION_FILE_NAME: &str = "session.json";

/// How long transient success overlays stay visible
pub const SUCCESS_OVERLAY_SECS: u64 = 2;
