//! Settings panel handlers

use iced::Task;
use iced::widget::{Id, operation};
use rfd::AsyncFileDialog;

use crate::DriftboxApp;
use crate::api::ApiClient;
use crate::config::settings::default_download_path;
use crate::types::{ActivePanel, InputId, Message, SettingsFormState};

impl DriftboxApp {
    // ==================== Settings Panel ====================

    /// Toggle the settings panel
    ///
    /// Opening takes a snapshot of the current settings so cancel can
    /// restore them; edits apply to the live config for immediate effect.
    /// Toggling while open behaves like cancel.
    pub fn handle_toggle_settings(&mut self) -> Task<Message> {
        if self.active_panel == ActivePanel::Settings {
            return self.handle_cancel_settings();
        }

        self.settings_form = Some(SettingsFormState::new(&self.config.settings));
        self.active_panel = ActivePanel::Settings;
        self.focused_field = InputId::SettingsServerUrl;
        operation::focus(Id::from(InputId::SettingsServerUrl))
    }

    /// Cancel settings panel and restore the snapshot
    pub fn handle_cancel_settings(&mut self) -> Task<Message> {
        if let Some(form) = self.settings_form.take() {
            self.config.settings = form.original_settings;
        }
        self.api = ApiClient::new(self.config.settings.server_base());
        self.active_panel = ActivePanel::None;
        Task::none()
    }

    /// Save settings to disk and close the panel
    ///
    /// A failed save reopens the form with the error so the edits are not
    /// silently lost.
    pub fn handle_save_settings(&mut self) -> Task<Message> {
        let form = self.settings_form.take();

        if let Err(e) = self.config.save() {
            let mut form = form.unwrap_or_else(|| SettingsFormState::new(&self.config.settings));
            form.error = Some(format!("Failed to save settings: {}", e));
            self.settings_form = Some(form);
            return Task::none();
        }

        self.api = ApiClient::new(self.config.settings.server_base());
        self.active_panel = ActivePanel::None;
        Task::none()
    }

    // ==================== Fields ====================

    /// Handle server URL field change
    pub fn handle_settings_server_url_changed(&mut self, url: String) -> Task<Message> {
        self.config.settings.server_url = url;
        if let Some(form) = &mut self.settings_form {
            form.error = None;
        }
        self.focused_field = InputId::SettingsServerUrl;
        Task::none()
    }

    /// Handle browse button press for the download folder
    pub fn handle_settings_pick_download_path(&mut self) -> Task<Message> {
        // Start the dialog where downloads currently land
        let initial_dir = self
            .config
            .settings
            .download_path
            .clone()
            .or_else(default_download_path);

        Task::future(async move {
            let mut dialog = AsyncFileDialog::new();
            if let Some(ref path) = initial_dir {
                dialog = dialog.set_directory(path);
            }

            match dialog.pick_folder().await {
                Some(handle) => {
                    let path = handle.path().to_string_lossy().into_owned();
                    Message::SettingsDownloadPathPicked(Some(path))
                }
                None => Message::SettingsDownloadPathPicked(None),
            }
        })
    }

    /// Handle download folder selection (None means the dialog was cancelled)
    pub fn handle_settings_download_path_picked(&mut self, path: Option<String>) -> Task<Message> {
        if let Some(path) = path {
            self.config.settings.download_path = Some(path);
        }
        Task::none()
    }

    /// Handle theme selection from the picker (live preview)
    ///
    /// The change is persisted on Save and reverted on Cancel.
    pub fn handle_settings_theme_selected(&mut self, theme: iced::Theme) -> Task<Message> {
        self.config.settings.theme = theme.into();
        Task::none()
    }
}
