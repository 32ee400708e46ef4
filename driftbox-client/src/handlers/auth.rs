//! Login, logout, and session lifecycle handlers

use iced::Task;
use iced::widget::{Id, operation};

use crate::DriftboxApp;
use crate::api::ApiError;
use crate::types::{
    ActivePanel, AuthState, FileListState, InputId, Message, UserManagementState,
};
use driftbox_common::api::UserProfile;

impl DriftboxApp {
    // ==================== Login Form Fields ====================

    /// Handle login username field change
    pub fn handle_login_username_changed(&mut self, username: String) -> Task<Message> {
        self.login_form.username = username;
        self.login_form.error = None;
        self.focused_field = InputId::LoginUsername;
        Task::none()
    }

    /// Handle login password field change
    pub fn handle_login_password_changed(&mut self, password: String) -> Task<Message> {
        self.login_form.password = password;
        self.login_form.error = None;
        self.focused_field = InputId::LoginPassword;
        Task::none()
    }

    // ==================== Login ====================

    /// Handle login button press
    ///
    /// Enter in either field also lands here, so the emptiness check runs
    /// even though the button itself is disabled for empty fields.
    pub fn handle_login_pressed(&mut self) -> Task<Message> {
        if self.overlay.as_ref().is_some_and(|o| o.is_loading()) {
            return Task::none();
        }

        let username = self.login_form.username.trim().to_string();
        let password = self.login_form.password.clone();
        if username.is_empty() || password.is_empty() {
            self.login_form.error = Some("Please enter username and password".to_string());
            return Task::none();
        }

        self.login_form.error = None;
        self.show_loading("Logging in...");

        let api = self.api.clone();
        Task::perform(
            async move { api.login(&username, &password).await },
            Message::LoginResult,
        )
    }

    /// Handle login attempt result
    ///
    /// On success the token is persisted and the authenticated view takes
    /// over; both file lists and the profile are fetched immediately.
    pub fn handle_login_result(&mut self, result: Result<String, ApiError>) -> Task<Message> {
        match result {
            Ok(token) => {
                self.session.set_token(token);
                if let Err(e) = self.session.save() {
                    tracing::warn!("Failed to save session: {}", e);
                }
                self.auth_state = AuthState::Authenticated;
                self.login_form.clear();
                self.enter_authenticated()
            }
            Err(e) => {
                self.overlay = None;
                self.login_form.error = Some(e.to_string());
                Task::none()
            }
        }
    }

    /// Kick off the initial fetches for a fresh authenticated view
    ///
    /// Runs at login and at startup when a persisted token is present. The
    /// profile fetch and the file listing run concurrently; the listing owns
    /// the overlay.
    pub fn enter_authenticated(&mut self) -> Task<Message> {
        let token = match self.require_token() {
            Ok(token) => token,
            Err(task) => return task,
        };

        self.show_loading("Loading files...");

        let api = self.api.clone();
        let profile_task = Task::perform(
            async move { api.user_info(&token).await },
            Message::UserInfoResult,
        );
        Task::batch([profile_task, self.load_files_task()])
    }

    // ==================== Session ====================

    /// Obtain the session token for an outgoing request
    ///
    /// Every request-issuing handler reads the token through here. An
    /// absent token never lets a request go out unauthenticated: the
    /// caller returns the forced-logout task instead.
    pub fn require_token(&mut self) -> Result<String, Task<Message>> {
        match self.session.token() {
            Some(token) => Ok(token.to_string()),
            None => Err(self.force_logout(Some("Please log in again.".to_string()))),
        }
    }

    /// Handle profile fetch result
    ///
    /// A 404 means the account behind the token no longer exists, which is
    /// treated like an expired session with its own message. Other failures
    /// leave the file view usable and surface a dismissable notice.
    pub fn handle_user_info_result(
        &mut self,
        result: Result<UserProfile, ApiError>,
    ) -> Task<Message> {
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                Task::none()
            }
            Err(ApiError::SessionExpired) => self.handle_session_expired(),
            Err(ApiError::Api { status: 404, .. }) => {
                self.force_logout(Some("User not found. Please log in again.".to_string()))
            }
            Err(e) => {
                self.notice = Some(format!("Could not load account details: {}", e));
                Task::none()
            }
        }
    }

    /// React to the server rejecting the session token
    ///
    /// Any in-flight response can report this; the reaction is always the
    /// same forced logout regardless of which operation tripped it.
    pub fn handle_session_expired(&mut self) -> Task<Message> {
        tracing::info!("Server rejected the session token, returning to login");
        self.force_logout(Some("Session expired. Please log in again.".to_string()))
    }

    // ==================== Logout ====================

    /// Handle log out button press
    pub fn handle_logout_pressed(&mut self) -> Task<Message> {
        self.force_logout(None)
    }

    /// Drop the session and reset every authenticated surface
    ///
    /// `login_error` is shown on the login form, which is what the user
    /// sees next. Config stays loaded; a pending settings snapshot is
    /// restored the same way cancelling the panel would.
    pub fn force_logout(&mut self, login_error: Option<String>) -> Task<Message> {
        self.session.clear();
        if let Err(e) = self.session.save() {
            tracing::warn!("Failed to clear session: {}", e);
        }

        if let Some(form) = self.settings_form.take() {
            self.config.settings = form.original_settings;
        }

        self.auth_state = AuthState::Unauthenticated;
        self.profile = None;
        self.files = FileListState::default();
        self.upload = None;
        self.upload_success_pending = false;
        self.users = UserManagementState::default();
        self.account_form.clear();
        self.active_panel = ActivePanel::None;
        self.overlay = None;
        self.notice = None;

        self.login_form.clear();
        self.login_form.error = login_error;

        self.focused_field = InputId::LoginUsername;
        operation::focus(Id::from(InputId::LoginUsername))
    }

    // ==================== Tab Navigation ====================

    /// Handle Tab pressed in the login form
    ///
    /// Checks which field is actually focused using async operations,
    /// then moves to the next field in sequence.
    pub fn handle_login_tab_pressed(&mut self) -> Task<Message> {
        let check_username = operation::is_focused(Id::from(InputId::LoginUsername));
        let check_password = operation::is_focused(Id::from(InputId::LoginPassword));

        Task::batch([
            check_username.map(|focused| (0, focused)),
            check_password.map(|focused| (1, focused)),
        ])
        .collect()
        .map(|results: Vec<(u8, bool)>| {
            let username_focused = results.iter().any(|(i, f)| *i == 0 && *f);
            let password_focused = results.iter().any(|(i, f)| *i == 1 && *f);
            Message::LoginFocusResult(username_focused, password_focused)
        })
    }

    /// Handle focus check result for login form Tab navigation
    pub fn handle_login_focus_result(
        &mut self,
        username_focused: bool,
        password_focused: bool,
    ) -> Task<Message> {
        let next_field = if username_focused {
            InputId::LoginPassword
        } else if password_focused {
            // Wrap around to first field
            InputId::LoginUsername
        } else {
            // None focused, start at first field
            InputId::LoginUsername
        };

        self.focused_field = next_field;
        operation::focus(Id::from(next_field))
    }
}
