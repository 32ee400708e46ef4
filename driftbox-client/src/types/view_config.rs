//! View configuration struct for passing state to view rendering

use iced::Theme;

use driftbox_common::api::UserProfile;

use crate::config::Settings;
use crate::constants::APP_NAME;
use crate::types::{
    AccountFormState, ActivePanel, AuthState, FileListState, LoginFormState, Overlay,
    SettingsFormState, UserManagementState,
};

/// Configuration struct for view rendering
///
/// Holds all the state needed to render the main layout. Uses references to
/// sub-structs for cleaner organization and simpler construction.
pub struct ViewConfig<'a> {
    /// Current theme for styling
    pub theme: Theme,

    /// Whether a session token is held
    pub auth_state: AuthState,

    /// Profile of the signed-in account (None until the fetch completes)
    pub profile: Option<&'a UserProfile>,

    /// Login form state (rendered when unauthenticated)
    pub login_form: &'a LoginFormState,

    /// File browser state (lists, search, upload inputs)
    pub files: &'a FileListState,

    /// User management panel state
    pub users: &'a UserManagementState,

    /// Password reset form state
    pub account_form: &'a AccountFormState,

    /// Settings form state (present when settings panel is open)
    pub settings_form: Option<&'a SettingsFormState>,

    /// Live settings values (edited in place while the panel is open)
    pub settings: &'a Settings,

    /// Currently open side panel
    pub active_panel: ActivePanel,

    /// Blocking overlay (loading or success notice), if any
    pub overlay: Option<&'a Overlay>,

    /// Dismissable inline notice (non-fatal problems)
    pub notice: Option<&'a str>,
}

/// Toolbar state configuration
///
/// Groups all toolbar-related state to simplify passing to build_toolbar.
pub struct ToolbarState<'a> {
    pub active_panel: ActivePanel,
    pub is_authenticated: bool,
    pub is_admin: bool,
    /// Username to display in the toolbar (None until the profile loads)
    pub username: Option<&'a str>,
}

impl<'a> ToolbarState<'a> {
    /// Get the title to display in the toolbar
    ///
    /// Returns the app name, with the signed-in username appended once the
    /// profile fetch has completed.
    pub fn toolbar_title(&self) -> String {
        match self.username.filter(|u| !u.is_empty()) {
            Some(username) => format!("{APP_NAME} - {username}"),
            None => APP_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_toolbar_state<'a>() -> ToolbarState<'a> {
        ToolbarState {
            active_panel: ActivePanel::None,
            is_authenticated: false,
            is_admin: false,
            username: None,
        }
    }

    #[test]
    fn test_toolbar_title_signed_out() {
        let state = default_toolbar_state();
        assert_eq!(state.toolbar_title(), "Driftbox");
    }

    #[test]
    fn test_toolbar_title_with_username() {
        let state = ToolbarState {
            is_authenticated: true,
            username: Some("alice"),
            ..default_toolbar_state()
        };
        assert_eq!(state.toolbar_title(), "Driftbox - alice");
    }

    #[test]
    fn test_toolbar_title_profile_not_loaded() {
        let state = ToolbarState {
            is_authenticated: true,
            username: None,
            ..default_toolbar_state()
        };
        // Authenticated but profile fetch still pending
        assert_eq!(state.toolbar_title(), "Driftbox");
    }

    #[test]
    fn test_toolbar_title_empty_username() {
        let state = ToolbarState {
            is_authenticated: true,
            username: Some(""),
            ..default_toolbar_state()
        };
        // Empty string should fall back to the plain app name
        assert_eq!(state.toolbar_title(), "Driftbox");
    }

    #[test]
    fn test_toolbar_title_unicode_username() {
        let state = ToolbarState {
            is_authenticated: true,
            username: Some("日本語ユーザー"),
            ..default_toolbar_state()
        };
        assert_eq!(state.toolbar_title(), "Driftbox - 日本語ユーザー");
    }
}
