//! Keyboard event handling (Tab, Enter, Escape)

use iced::keyboard::{self, key};
use iced::widget::{Id, operation};
use iced::{Event, Task};

use crate::DriftboxApp;
use crate::types::{ActivePanel, InputId, Message, UserManagementMode};

impl DriftboxApp {
    /// Handle keyboard events that no widget captured
    ///
    /// Focused text inputs consume Enter themselves through `on_submit`;
    /// everything here only fires when focus is elsewhere, so button-less
    /// submits and panel dismissal still work from the keyboard.
    pub fn handle_keyboard_event(&mut self, event: Event) -> Task<Message> {
        // Handle plain Tab key for field cycling
        if let Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Tab),
            modifiers,
            ..
        }) = event
            && !modifiers.command()
            && !modifiers.shift()
        {
            return self.update(Message::TabPressed);
        }

        // Handle Enter key
        if let Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Enter),
            ..
        }) = event
        {
            // Confirm dialogs require an explicit button press
            if self.files.pending_delete.is_some() {
                return Task::none();
            }

            match self.active_panel {
                ActivePanel::Users => {
                    if self.users.mode == UserManagementMode::Create {
                        let can_create = !self.users.username.trim().is_empty()
                            && !self.users.password.is_empty();
                        if can_create {
                            return self.update(Message::UsersCreatePressed);
                        }
                    }
                }
                ActivePanel::Account => {
                    let can_submit = !self.account_form.current_password.is_empty()
                        && !self.account_form.new_password.is_empty()
                        && !self.account_form.confirm_password.is_empty();
                    if can_submit {
                        return self.update(Message::AccountResetPressed);
                    }
                }
                ActivePanel::Settings => {
                    return self.update(Message::SaveSettings);
                }
                ActivePanel::None => {
                    if !self.auth_state.is_authenticated() {
                        let can_submit = !self.login_form.username.trim().is_empty()
                            && !self.login_form.password.is_empty();
                        if can_submit {
                            return self.update(Message::LoginPressed);
                        }
                    }
                }
            }
        }

        // Handle Escape key
        if let Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) = event
        {
            // The file delete confirmation sits above any panel
            if self.files.pending_delete.is_some() {
                return self.update(Message::FileCancelDelete);
            }

            match self.active_panel {
                ActivePanel::Users => {
                    if matches!(self.users.mode, UserManagementMode::ConfirmDelete { .. }) {
                        return self.update(Message::UsersCancelDelete);
                    }
                    // Escape returns to the list, or closes from the list
                    return self.update(Message::UsersCancel);
                }
                ActivePanel::Account => {
                    return self.update(Message::ToggleAccount);
                }
                ActivePanel::Settings => {
                    return self.update(Message::CancelSettings);
                }
                ActivePanel::None => {}
            }
        }

        Task::none()
    }

    /// Handle Tab key navigation across the active form
    ///
    /// Forms with one text field just refocus it; multi-field forms check
    /// actual focus asynchronously and cycle from there.
    pub fn handle_tab_navigation(&mut self) -> Task<Message> {
        match self.active_panel {
            ActivePanel::Users => {
                if self.users.mode == UserManagementMode::Create {
                    return self.update(Message::UsersCreateTabPressed);
                }
            }
            ActivePanel::Account => {
                return self.update(Message::AccountTabPressed);
            }
            ActivePanel::Settings => {
                // Settings has a single text field, so focus stays put
                self.focused_field = InputId::SettingsServerUrl;
                return operation::focus(Id::from(InputId::SettingsServerUrl));
            }
            ActivePanel::None => {
                if self.auth_state.is_authenticated() {
                    // The files view has a single text field
                    self.focused_field = InputId::SearchKeyword;
                    return operation::focus(Id::from(InputId::SearchKeyword));
                }
                return self.update(Message::LoginTabPressed);
            }
        }
        Task::none()
    }
}
