//! Form and panel state structs

use driftbox_common::api::UserRecord;

use crate::config::Settings;

// =============================================================================
// Login Form State
// =============================================================================

/// Login form inputs and error state
#[derive(Clone, Default)]
pub struct LoginFormState {
    /// Username input
    pub username: String,
    /// Password input
    pub password: String,
    /// Error message to display (login failure or forced-logout notice)
    pub error: Option<String>,
}

impl LoginFormState {
    /// Clear inputs and error
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.error = None;
    }
}

// Manual Debug implementation to avoid logging passwords
impl std::fmt::Debug for LoginFormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginFormState")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("error", &self.error)
            .finish()
    }
}

// =============================================================================
// Account Form State
// =============================================================================

/// Password reset form inputs and error state
#[derive(Clone, Default)]
pub struct AccountFormState {
    /// Current password input
    pub current_password: String,
    /// New password input
    pub new_password: String,
    /// Confirmation of the new password
    pub confirm_password: String,
    /// Error message to display
    pub error: Option<String>,
}

impl AccountFormState {
    /// Clear inputs and error
    pub fn clear(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
        self.error = None;
    }
}

// Manual Debug implementation to avoid logging passwords
impl std::fmt::Debug for AccountFormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountFormState")
            .field("current_password", &"[REDACTED]")
            .field("new_password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("error", &self.error)
            .finish()
    }
}

// =============================================================================
// Settings Form State
// =============================================================================

/// Settings panel form state
///
/// Stores a snapshot of the settings when the panel is opened, allowing the
/// user to cancel and restore the original values. Edits apply to the live
/// config so theme changes preview immediately.
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    /// Original settings snapshot to restore on cancel
    pub original_settings: Settings,
    /// Error message to display (e.g., save failure)
    pub error: Option<String>,
}

impl SettingsFormState {
    /// Snapshot the current settings for later restore
    pub fn new(settings: &Settings) -> Self {
        Self {
            original_settings: settings.clone(),
            error: None,
        }
    }
}

// =============================================================================
// User Management State
// =============================================================================

/// User management panel mode
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UserManagementMode {
    /// Showing list of all accounts
    #[default]
    List,
    /// Creating a new account
    Create,
    /// Confirming deletion of an account
    ConfirmDelete {
        /// Account to delete
        user: UserRecord,
    },
}

/// User management panel state
#[derive(Clone, Default)]
pub struct UserManagementState {
    /// Current mode (list, create, confirm delete)
    pub mode: UserManagementMode,
    /// All accounts (None = not loaded, Some(Ok) = loaded, Some(Err) = error)
    pub all_users: Option<Result<Vec<UserRecord>, String>>,
    /// Username for the create form
    pub username: String,
    /// Password for the create form
    pub password: String,
    /// Admin flag for the create form
    pub is_admin: bool,
    /// Error message for the create form
    pub create_error: Option<String>,
    /// Error message for the list view (e.g., delete failed)
    pub list_error: Option<String>,
    /// Id of the account whose delete request is in flight
    ///
    /// The matching row's delete button stays disabled until the
    /// response arrives.
    pub deleting_id: Option<String>,
}

// Manual Debug implementation to avoid logging passwords
impl std::fmt::Debug for UserManagementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserManagementState")
            .field("mode", &self.mode)
            .field("all_users", &self.all_users)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("is_admin", &self.is_admin)
            .field("create_error", &self.create_error)
            .field("list_error", &self.list_error)
            .field("deleting_id", &self.deleting_id)
            .finish()
    }
}

impl UserManagementState {
    /// Reset to list mode and clear all form state
    pub fn reset_to_list(&mut self) {
        self.mode = UserManagementMode::List;
        self.clear_create_form();
        self.list_error = None;
    }

    /// Clear the create form fields
    pub fn clear_create_form(&mut self) {
        self.username.clear();
        self.password.clear();
        self.is_admin = false;
        self.create_error = None;
    }

    /// Enter create mode
    pub fn enter_create_mode(&mut self) {
        self.clear_create_form();
        self.mode = UserManagementMode::Create;
    }

    /// Enter confirm delete mode for an account
    pub fn enter_confirm_delete_mode(&mut self, user: UserRecord) {
        self.mode = UserManagementMode::ConfirmDelete { user };
    }

    /// Remove an account row from the loaded list by id
    ///
    /// Used after a successful delete; the list is not refetched.
    pub fn remove_user(&mut self, id: &str) {
        if let Some(Ok(users)) = &mut self.all_users {
            users.retain(|u| u.id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(id: &str, username: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            username: username.to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn test_login_form_clear() {
        let mut form = LoginFormState {
            username: "alice".to_string(),
            password: "secret".to_string(),
            error: Some("Login failed".to_string()),
        };
        form.clear();
        assert!(form.username.is_empty());
        assert!(form.password.is_empty());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_login_form_debug_redacts_password() {
        let form = LoginFormState {
            username: "alice".to_string(),
            password: "secret".to_string(),
            error: None,
        };
        let debug = format!("{:?}", form);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("alice"));
    }

    #[test]
    fn test_user_management_enter_create_mode_clears_form() {
        let mut state = UserManagementState {
            username: "left over".to_string(),
            password: "stale".to_string(),
            is_admin: true,
            create_error: Some("old error".to_string()),
            ..Default::default()
        };
        state.enter_create_mode();
        assert_eq!(state.mode, UserManagementMode::Create);
        assert!(state.username.is_empty());
        assert!(state.password.is_empty());
        assert!(!state.is_admin);
        assert!(state.create_error.is_none());
    }

    #[test]
    fn test_user_management_remove_user() {
        let mut state = UserManagementState {
            all_users: Some(Ok(vec![sample_user("1", "alice"), sample_user("2", "bob")])),
            ..Default::default()
        };
        state.remove_user("1");
        let users = state.all_users.as_ref().and_then(|r| r.as_ref().ok());
        let usernames: Vec<&str> = users
            .map(|u| u.iter().map(|x| x.username.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(usernames, vec!["bob"]);
    }

    #[test]
    fn test_user_management_remove_user_ignores_error_state() {
        let mut state = UserManagementState {
            all_users: Some(Err("Failed to fetch users".to_string())),
            ..Default::default()
        };
        // Should not panic or change anything
        state.remove_user("1");
        assert!(matches!(state.all_users, Some(Err(_))));
    }

    #[test]
    fn test_user_management_reset_to_list() {
        let mut state = UserManagementState::default();
        state.enter_confirm_delete_mode(sample_user("1", "alice"));
        state.list_error = Some("Delete failed".to_string());
        state.reset_to_list();
        assert_eq!(state.mode, UserManagementMode::List);
        assert!(state.list_error.is_none());
    }
}
