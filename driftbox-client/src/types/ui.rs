//! UI state types: auth state, panels, overlay, focus targets

use iced::widget::Id;

// =============================================================================
// Authentication State
// =============================================================================

/// Top-level view state
///
/// Presence of a session token is the only thing that moves this state;
/// the client never inspects the token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    /// No token present; login form shown
    #[default]
    Unauthenticated,
    /// Token present; file views active (optimistic until the first API call)
    Authenticated,
}

impl AuthState {
    /// Whether the authenticated view is active
    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

// =============================================================================
// Panels
// =============================================================================

/// Which stacked panel is open over the files view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    /// No panel open
    #[default]
    None,
    /// User management panel (admin affordance)
    Users,
    /// Account panel (password reset)
    Account,
    /// Settings panel
    Settings,
}

// =============================================================================
// Overlay
// =============================================================================

/// Process-wide overlay state
///
/// At most one overlay exists; starting a new operation overwrites the
/// message rather than stacking. Success notices auto-dismiss after
/// [`crate::constants::SUCCESS_OVERLAY_SECS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// An operation is in flight; the message names it
    Loading(String),
    /// A completed operation's notice, shown briefly
    Success(String),
}

impl Overlay {
    /// Whether this overlay reports an in-flight operation
    pub fn is_loading(&self) -> bool {
        matches!(self, Overlay::Loading(_))
    }
}

// =============================================================================
// Input Focus
// =============================================================================

/// Identifiers for focusable text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    /// Login form: username field
    LoginUsername,
    /// Login form: password field
    LoginPassword,
    /// Files toolbar: search field
    SearchKeyword,
    /// User create form: username field
    UsersUsername,
    /// User create form: password field
    UsersPassword,
    /// Account panel: current password field
    AccountCurrentPassword,
    /// Account panel: new password field
    AccountNewPassword,
    /// Account panel: confirm password field
    AccountConfirmPassword,
    /// Settings panel: server URL field
    SettingsServerUrl,
}

impl From<InputId> for Id {
    fn from(id: InputId) -> Self {
        match id {
            InputId::LoginUsername => Id::new("login_username"),
            InputId::LoginPassword => Id::new("login_password"),
            InputId::SearchKeyword => Id::new("search_keyword"),
            InputId::UsersUsername => Id::new("users_username"),
            InputId::UsersPassword => Id::new("users_password"),
            InputId::AccountCurrentPassword => Id::new("account_current_password"),
            InputId::AccountNewPassword => Id::new("account_new_password"),
            InputId::AccountConfirmPassword => Id::new("account_confirm_password"),
            InputId::SettingsServerUrl => Id::new("settings_server_url"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_default_is_unauthenticated() {
        assert_eq!(AuthState::default(), AuthState::Unauthenticated);
        assert!(!AuthState::default().is_authenticated());
    }

    #[test]
    fn test_overlay_kind() {
        let loading = Overlay::Loading("Loading files...".to_string());
        assert!(loading.is_loading());

        let success = Overlay::Success("Upload successful!".to_string());
        assert!(!success.is_loading());
    }
}
