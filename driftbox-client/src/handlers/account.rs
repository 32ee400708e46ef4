//! Account panel handlers (password reset)

use iced::Task;
use iced::widget::{Id, operation};

use crate::DriftboxApp;
use crate::api::ApiError;
use crate::types::{ActivePanel, InputId, Message};
use driftbox_common::validators::{self, PasswordError};

impl DriftboxApp {
    // ==================== Panel Toggle ====================

    /// Toggle the account panel
    ///
    /// The form is cleared on both open and close so passwords never
    /// linger in state.
    pub fn handle_toggle_account(&mut self) -> Task<Message> {
        if self.active_panel == ActivePanel::Account {
            self.account_form.clear();
            self.active_panel = ActivePanel::None;
            return Task::none();
        }
        if !self.auth_state.is_authenticated() {
            return Task::none();
        }

        self.account_form.clear();
        self.active_panel = ActivePanel::Account;
        self.focused_field = InputId::AccountCurrentPassword;
        operation::focus(Id::from(InputId::AccountCurrentPassword))
    }

    // ==================== Form Fields ====================

    /// Handle current password field change
    pub fn handle_account_current_password_changed(&mut self, value: String) -> Task<Message> {
        self.account_form.current_password = value;
        self.account_form.error = None;
        self.focused_field = InputId::AccountCurrentPassword;
        Task::none()
    }

    /// Handle new password field change
    pub fn handle_account_new_password_changed(&mut self, value: String) -> Task<Message> {
        self.account_form.new_password = value;
        self.account_form.error = None;
        self.focused_field = InputId::AccountNewPassword;
        Task::none()
    }

    /// Handle confirm password field change
    pub fn handle_account_confirm_password_changed(&mut self, value: String) -> Task<Message> {
        self.account_form.confirm_password = value;
        self.account_form.error = None;
        self.focused_field = InputId::AccountConfirmPassword;
        Task::none()
    }

    // ==================== Submit ====================

    /// Handle reset password button press
    pub fn handle_account_reset_pressed(&mut self) -> Task<Message> {
        // Validate: current password required
        if self.account_form.current_password.is_empty() {
            self.account_form.error = Some("Current password is required".to_string());
            self.focused_field = InputId::AccountCurrentPassword;
            return operation::focus(Id::from(InputId::AccountCurrentPassword));
        }

        // Validate: new password meets the password rules
        if let Err(e) = validators::validate_password(&self.account_form.new_password) {
            self.account_form.error = Some(match e {
                PasswordError::Empty => "New password is required".to_string(),
                PasswordError::TooShort => format!(
                    "New password must be at least {} characters",
                    validators::MIN_PASSWORD_LENGTH
                ),
                PasswordError::TooLong => format!(
                    "New password must be at most {} characters",
                    validators::MAX_PASSWORD_LENGTH
                ),
            });
            self.focused_field = InputId::AccountNewPassword;
            return operation::focus(Id::from(InputId::AccountNewPassword));
        }

        // Validate: passwords must match
        if self.account_form.new_password != self.account_form.confirm_password {
            self.account_form.error = Some("Passwords do not match".to_string());
            self.focused_field = InputId::AccountConfirmPassword;
            return operation::focus(Id::from(InputId::AccountConfirmPassword));
        }

        let token = match self.require_token() {
            Ok(token) => token,
            Err(task) => return task,
        };

        self.account_form.error = None;
        self.show_loading("Resetting password...");

        let api = self.api.clone();
        let current = self.account_form.current_password.clone();
        let new = self.account_form.new_password.clone();
        Task::perform(
            async move { api.reset_password(&token, &current, &new).await },
            Message::AccountResetResult,
        )
    }

    /// Handle reset password result
    ///
    /// Success closes the panel behind the notice; the old token stays
    /// valid, so no re-login is needed.
    pub fn handle_account_reset_result(&mut self, result: Result<(), ApiError>) -> Task<Message> {
        match result {
            Ok(()) => {
                self.account_form.clear();
                self.active_panel = ActivePanel::None;
                self.show_success("Password reset successful!")
            }
            Err(e) if e.is_session_expired() => self.handle_session_expired(),
            Err(e) => {
                self.clear_loading_overlay();
                self.account_form.error = Some(e.to_string());
                Task::none()
            }
        }
    }

    // ==================== Tab Navigation ====================

    /// Handle Tab pressed in the account form
    ///
    /// Checks which field is actually focused using async operations,
    /// then moves to the next field in sequence.
    pub fn handle_account_tab_pressed(&mut self) -> Task<Message> {
        let check_current = operation::is_focused(Id::from(InputId::AccountCurrentPassword));
        let check_new = operation::is_focused(Id::from(InputId::AccountNewPassword));
        let check_confirm = operation::is_focused(Id::from(InputId::AccountConfirmPassword));

        Task::batch([
            check_current.map(|focused| (0, focused)),
            check_new.map(|focused| (1, focused)),
            check_confirm.map(|focused| (2, focused)),
        ])
        .collect()
        .map(|results: Vec<(u8, bool)>| {
            let current_focused = results.iter().any(|(i, f)| *i == 0 && *f);
            let new_focused = results.iter().any(|(i, f)| *i == 1 && *f);
            let confirm_focused = results.iter().any(|(i, f)| *i == 2 && *f);
            Message::AccountFocusResult(current_focused, new_focused, confirm_focused)
        })
    }

    /// Handle focus check result for account form Tab navigation
    pub fn handle_account_focus_result(
        &mut self,
        current_focused: bool,
        new_focused: bool,
        confirm_focused: bool,
    ) -> Task<Message> {
        let next_field = if current_focused {
            InputId::AccountNewPassword
        } else if new_focused {
            InputId::AccountConfirmPassword
        } else if confirm_focused {
            // Wrap around to first field
            InputId::AccountCurrentPassword
        } else {
            // None focused, start at first field
            InputId::AccountCurrentPassword
        };

        self.focused_field = next_field;
        operation::focus(Id::from(next_field))
    }
}
