//! User management panel handlers

use iced::Task;
use iced::widget::{Id, operation};

use crate::DriftboxApp;
use crate::api::ApiError;
use crate::types::{ActivePanel, InputId, Message, UserManagementMode};
use driftbox_common::api::UserRecord;
use driftbox_common::validators::{self, PasswordError, UsernameError};

impl DriftboxApp {
    // ==================== Panel Toggle ====================

    /// Toggle the user management panel
    ///
    /// Opening fetches a fresh user list from the server; the panel is
    /// only reachable for admins.
    pub fn handle_toggle_users(&mut self) -> Task<Message> {
        if self.active_panel == ActivePanel::Users {
            self.users.reset_to_list();
            self.active_panel = ActivePanel::None;
            return Task::none();
        }
        if !self.profile.as_ref().is_some_and(|p| p.is_admin) {
            return Task::none();
        }

        self.active_panel = ActivePanel::Users;
        self.users.reset_to_list();
        self.users.all_users = None;
        self.users.list_error = None;
        self.show_loading("Loading users...");
        self.fetch_users_task()
    }

    /// Fetch the full user list
    pub fn fetch_users_task(&mut self) -> Task<Message> {
        let token = match self.require_token() {
            Ok(token) => token,
            Err(task) => return task,
        };

        let api = self.api.clone();
        Task::perform(async move { api.users(&token).await }, Message::UsersLoaded)
    }

    /// Handle arrival of the user list
    pub fn handle_users_loaded(&mut self, result: Result<Vec<UserRecord>, ApiError>) -> Task<Message> {
        if matches!(&result, Err(e) if e.is_session_expired()) {
            return self.handle_session_expired();
        }

        self.users.all_users = Some(result.map_err(|e| e.to_string()));
        self.clear_loading_overlay();
        Task::none()
    }

    /// Handle cancel in the panel
    ///
    /// Cancel in the create form returns to the list; cancel in the list
    /// closes the panel.
    pub fn handle_users_cancel(&mut self) -> Task<Message> {
        match self.users.mode {
            UserManagementMode::Create => {
                self.users.reset_to_list();
            }
            _ => {
                self.users.reset_to_list();
                self.active_panel = ActivePanel::None;
            }
        }
        Task::none()
    }

    // ==================== Create Form ====================

    /// Switch to the create user form
    pub fn handle_users_show_create(&mut self) -> Task<Message> {
        self.users.enter_create_mode();
        self.focused_field = InputId::UsersUsername;
        operation::focus(Id::from(InputId::UsersUsername))
    }

    /// Handle create form username change
    pub fn handle_users_create_username_changed(&mut self, username: String) -> Task<Message> {
        self.users.username = username;
        self.users.create_error = None;
        self.focused_field = InputId::UsersUsername;
        Task::none()
    }

    /// Handle create form password change
    pub fn handle_users_create_password_changed(&mut self, password: String) -> Task<Message> {
        self.users.password = password;
        self.users.create_error = None;
        self.focused_field = InputId::UsersPassword;
        Task::none()
    }

    /// Handle create form admin checkbox toggle
    pub fn handle_users_create_is_admin_toggled(&mut self, is_admin: bool) -> Task<Message> {
        self.users.is_admin = is_admin;
        Task::none()
    }

    /// Handle create user button press
    ///
    /// Validates locally before sending; the server remains the
    /// enforcement boundary and its rejection lands in the same error slot.
    pub fn handle_users_create_pressed(&mut self) -> Task<Message> {
        if let Err(e) = validators::validate_username(&self.users.username) {
            self.users.create_error = Some(match e {
                UsernameError::Empty => "Username is required".to_string(),
                UsernameError::TooLong => format!(
                    "Username must be at most {} characters",
                    validators::MAX_USERNAME_LENGTH
                ),
                UsernameError::InvalidCharacters => {
                    "Username contains invalid characters".to_string()
                }
            });
            self.focused_field = InputId::UsersUsername;
            return operation::focus(Id::from(InputId::UsersUsername));
        }

        if let Err(e) = validators::validate_password(&self.users.password) {
            self.users.create_error = Some(match e {
                PasswordError::Empty => "Password is required".to_string(),
                PasswordError::TooShort => format!(
                    "Password must be at least {} characters",
                    validators::MIN_PASSWORD_LENGTH
                ),
                PasswordError::TooLong => format!(
                    "Password must be at most {} characters",
                    validators::MAX_PASSWORD_LENGTH
                ),
            });
            self.focused_field = InputId::UsersPassword;
            return operation::focus(Id::from(InputId::UsersPassword));
        }

        let token = match self.require_token() {
            Ok(token) => token,
            Err(task) => return task,
        };

        self.users.create_error = None;
        self.show_loading("Creating user...");

        let api = self.api.clone();
        let username = self.users.username.clone();
        let password = self.users.password.clone();
        let is_admin = self.users.is_admin;
        Task::perform(
            async move { api.signup(&token, &username, &password, is_admin).await },
            Message::UsersCreateResult,
        )
    }

    /// Handle create user result
    ///
    /// Success returns to the list view and refetches it silently behind
    /// the success notice; the stale list is dropped immediately.
    pub fn handle_users_create_result(&mut self, result: Result<(), ApiError>) -> Task<Message> {
        match result {
            Ok(()) => {
                self.users.reset_to_list();
                self.users.all_users = None;
                Task::batch([
                    self.fetch_users_task(),
                    self.show_success("User created successfully!"),
                ])
            }
            Err(e) if e.is_session_expired() => self.handle_session_expired(),
            Err(e) => {
                self.clear_loading_overlay();
                self.users.create_error = Some(e.to_string());
                Task::none()
            }
        }
    }

    // ==================== Delete ====================

    /// Handle delete button press on a user row (opens the confirm dialog)
    pub fn handle_users_delete_clicked(&mut self, user: UserRecord) -> Task<Message> {
        self.users.enter_confirm_delete_mode(user);
        Task::none()
    }

    /// Handle delete confirmation
    pub fn handle_users_confirm_delete(&mut self) -> Task<Message> {
        let UserManagementMode::ConfirmDelete { user } = self.users.mode.clone() else {
            return Task::none();
        };
        let token = match self.require_token() {
            Ok(token) => token,
            Err(task) => return task,
        };

        self.users.mode = UserManagementMode::List;
        self.users.list_error = None;
        self.users.deleting_id = Some(user.id.clone());
        self.show_loading("Deleting user...");

        let api = self.api.clone();
        let id = user.id;
        Task::future(async move {
            let result = api.delete_user(&token, &id).await;
            Message::UsersDeleteResult { id, result }
        })
    }

    /// Handle delete dialog cancellation
    pub fn handle_users_cancel_delete(&mut self) -> Task<Message> {
        if matches!(self.users.mode, UserManagementMode::ConfirmDelete { .. }) {
            self.users.mode = UserManagementMode::List;
        }
        Task::none()
    }

    /// Handle delete completion
    ///
    /// The row is removed locally on success; the next panel open fetches
    /// a fresh list anyway.
    pub fn handle_users_delete_result(
        &mut self,
        id: String,
        result: Result<(), ApiError>,
    ) -> Task<Message> {
        if self.users.deleting_id.as_deref() == Some(id.as_str()) {
            self.users.deleting_id = None;
        }

        match result {
            Ok(()) => {
                self.users.remove_user(&id);
                self.clear_loading_overlay();
                Task::none()
            }
            Err(e) if e.is_session_expired() => self.handle_session_expired(),
            Err(e) => {
                self.clear_loading_overlay();
                self.users.list_error = Some(format!("Failed to delete user: {}", e));
                Task::none()
            }
        }
    }

    // ==================== Tab Navigation ====================

    /// Handle Tab pressed in the create user form
    ///
    /// Checks which field is actually focused using async operations,
    /// then moves to the next field in sequence.
    pub fn handle_users_create_tab_pressed(&mut self) -> Task<Message> {
        let check_username = operation::is_focused(Id::from(InputId::UsersUsername));
        let check_password = operation::is_focused(Id::from(InputId::UsersPassword));

        Task::batch([
            check_username.map(|focused| (0, focused)),
            check_password.map(|focused| (1, focused)),
        ])
        .collect()
        .map(|results: Vec<(u8, bool)>| {
            let username_focused = results.iter().any(|(i, f)| *i == 0 && *f);
            let password_focused = results.iter().any(|(i, f)| *i == 1 && *f);
            Message::UsersCreateFocusResult(username_focused, password_focused)
        })
    }

    /// Handle focus check result for create user form Tab navigation
    pub fn handle_users_create_focus_result(
        &mut self,
        username_focused: bool,
        password_focused: bool,
    ) -> Task<Message> {
        let next_field = if username_focused {
            InputId::UsersPassword
        } else if password_focused {
            // Wrap around to first field
            InputId::UsersUsername
        } else {
            // None focused, start at first field
            InputId::UsersUsername
        };

        self.focused_field = next_field;
        operation::focus(Id::from(next_field))
    }
}
