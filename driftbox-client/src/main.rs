//! Driftbox - File Sharing Client
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod config;
mod constants;
mod handlers;
mod style;
mod types;
mod views;

use iced::widget::{Id, operation};
use iced::{Element, Subscription, Task, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::ApiClient;
use config::{Config, SessionStore};
use driftbox_common::api::UserProfile;
use style::{WINDOW_HEIGHT_MIN, WINDOW_TITLE, WINDOW_WIDTH_MIN};
use types::{
    AccountFormState, ActivePanel, AuthState, FileListState, InputId, LoginFormState, Message,
    Overlay, SettingsFormState, UploadBatch, UserManagementState, ViewConfig,
};

/// Application entry point
///
/// Initializes logging, restores the saved window geometry, and starts the
/// Iced event loop.
pub fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config early to get saved window position/size
    let config = Config::load();
    let window_size = iced::Size::new(config.settings.window_width, config.settings.window_height);
    let window_position = match (config.settings.window_x, config.settings.window_y) {
        (Some(x), Some(y)) => {
            iced::window::Position::Specific(iced::Point::new(x as f32, y as f32))
        }
        _ => iced::window::Position::default(),
    };

    iced::application(DriftboxApp::new, DriftboxApp::update, DriftboxApp::view)
        .title(WINDOW_TITLE)
        .theme(DriftboxApp::theme)
        .subscription(DriftboxApp::subscription)
        .window(iced::window::Settings {
            size: window_size,
            min_size: Some(iced::Size::new(WINDOW_WIDTH_MIN, WINDOW_HEIGHT_MIN)),
            position: window_position,
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "driftbox".to_string(),
                ..Default::default()
            },
            ..Default::default()
        })
        .run()
}

/// Main application state for the Driftbox client
struct DriftboxApp {
    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------
    /// Application configuration (server URL, download folder, theme, window)
    config: Config,
    /// Persisted session token
    session: SessionStore,

    // -------------------------------------------------------------------------
    // Server
    // -------------------------------------------------------------------------
    /// HTTP client bound to the configured server base URL
    api: ApiClient,

    // -------------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------------
    /// Whether the login form or the file views are shown
    auth_state: AuthState,
    /// Profile of the logged-in user (absent until the first fetch lands)
    profile: Option<UserProfile>,

    // -------------------------------------------------------------------------
    // Forms
    // -------------------------------------------------------------------------
    /// Login form inputs and error
    login_form: LoginFormState,
    /// Account panel form inputs and error
    account_form: AccountFormState,
    /// Currently focused input field
    focused_field: InputId,

    // -------------------------------------------------------------------------
    // Files
    // -------------------------------------------------------------------------
    /// Both file list slots plus search and per-action error state
    files: FileListState,
    /// Upload batch in flight, if any
    upload: Option<UploadBatch>,
    /// Whether the next listing arrival should show the upload success notice
    upload_success_pending: bool,

    // -------------------------------------------------------------------------
    // Panels
    // -------------------------------------------------------------------------
    /// User management panel state
    users: UserManagementState,
    /// Settings panel snapshot (present while the panel is open)
    settings_form: Option<SettingsFormState>,
    /// Which panel is stacked over the base view
    active_panel: ActivePanel,

    // -------------------------------------------------------------------------
    // UI State
    // -------------------------------------------------------------------------
    /// Process-wide loading or success overlay
    overlay: Option<Overlay>,
    /// Dismissable notice under the toolbar
    notice: Option<String>,
}

impl Default for DriftboxApp {
    fn default() -> Self {
        let config = Config::load();
        let session = SessionStore::load();
        let api = ApiClient::new(config.settings.server_base());
        // A stored token starts the app in the authenticated view; the
        // first request decides whether it still holds.
        let auth_state = if session.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        };
        Self {
            // Persistence
            config,
            session,
            // Server
            api,
            // Authentication
            auth_state,
            profile: None,
            // Forms
            login_form: LoginFormState::default(),
            account_form: AccountFormState::default(),
            focused_field: InputId::LoginUsername,
            // Files
            files: FileListState::default(),
            upload: None,
            upload_success_pending: false,
            // Panels
            users: UserManagementState::default(),
            settings_form: None,
            active_panel: ActivePanel::None,
            // UI State
            overlay: None,
            notice: None,
        }
    }
}

impl DriftboxApp {
    /// Initialize the application and its startup tasks
    ///
    /// With a stored session the file lists and profile are fetched right
    /// away; otherwise the login form takes focus.
    fn new() -> (Self, Task<Message>) {
        let mut app = Self::default();

        let task = if app.auth_state.is_authenticated() {
            app.enter_authenticated()
        } else {
            operation::focus(Id::from(InputId::LoginUsername))
        };

        (app, task)
    }

    /// Process a message and update application state
    ///
    /// Central message dispatcher that routes messages to their handlers.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Session
            Message::LoginUsernameChanged(username) => {
                self.handle_login_username_changed(username)
            }
            Message::LoginPasswordChanged(password) => {
                self.handle_login_password_changed(password)
            }
            Message::LoginPressed => self.handle_login_pressed(),
            Message::LoginResult(result) => self.handle_login_result(result),
            Message::UserInfoResult(result) => self.handle_user_info_result(result),
            Message::LogoutPressed => self.handle_logout_pressed(),

            // Files
            Message::SearchKeywordChanged(keyword) => self.handle_search_keyword_changed(keyword),
            Message::SearchSubmitted => self.handle_search_submitted(),
            Message::FilesLoaded { mine, shared } => self.handle_files_loaded(mine, shared),
            Message::FileDownloadClicked { id, filename } => {
                self.handle_file_download_clicked(id, filename)
            }
            Message::FileDownloadResult { filename, result } => {
                self.handle_file_download_result(filename, result)
            }
            Message::FileDeleteClicked { id, filename } => {
                self.handle_file_delete_clicked(id, filename)
            }
            Message::FileConfirmDelete => self.handle_file_confirm_delete(),
            Message::FileCancelDelete => self.handle_file_cancel_delete(),
            Message::FileDeleteResult(result) => self.handle_file_delete_result(result),

            // Uploads
            Message::UploadPressed => self.handle_upload_pressed(),
            Message::UploadSharedToggled(shared) => self.handle_upload_shared_toggled(shared),
            Message::UploadFilesPicked(paths) => self.handle_upload_files_picked(paths),
            Message::UploadPickerCancelled => Task::none(),
            Message::UploadFileResult { filename, result } => {
                self.handle_upload_file_result(filename, result)
            }

            // User management
            Message::ToggleUsers => self.handle_toggle_users(),
            Message::UsersLoaded(result) => self.handle_users_loaded(result),
            Message::UsersShowCreate => self.handle_users_show_create(),
            Message::UsersCreateUsernameChanged(username) => {
                self.handle_users_create_username_changed(username)
            }
            Message::UsersCreatePasswordChanged(password) => {
                self.handle_users_create_password_changed(password)
            }
            Message::UsersCreateIsAdminToggled(is_admin) => {
                self.handle_users_create_is_admin_toggled(is_admin)
            }
            Message::UsersCreatePressed => self.handle_users_create_pressed(),
            Message::UsersCreateResult(result) => self.handle_users_create_result(result),
            Message::UsersCancel => self.handle_users_cancel(),
            Message::UsersDeleteClicked(user) => self.handle_users_delete_clicked(user),
            Message::UsersConfirmDelete => self.handle_users_confirm_delete(),
            Message::UsersCancelDelete => self.handle_users_cancel_delete(),
            Message::UsersDeleteResult { id, result } => {
                self.handle_users_delete_result(id, result)
            }

            // Account
            Message::ToggleAccount => self.handle_toggle_account(),
            Message::AccountCurrentPasswordChanged(value) => {
                self.handle_account_current_password_changed(value)
            }
            Message::AccountNewPasswordChanged(value) => {
                self.handle_account_new_password_changed(value)
            }
            Message::AccountConfirmPasswordChanged(value) => {
                self.handle_account_confirm_password_changed(value)
            }
            Message::AccountResetPressed => self.handle_account_reset_pressed(),
            Message::AccountResetResult(result) => self.handle_account_reset_result(result),

            // Settings
            Message::ToggleSettings => self.handle_toggle_settings(),
            Message::SettingsServerUrlChanged(url) => self.handle_settings_server_url_changed(url),
            Message::SettingsPickDownloadPath => self.handle_settings_pick_download_path(),
            Message::SettingsDownloadPathPicked(path) => {
                self.handle_settings_download_path_picked(path)
            }
            Message::SettingsThemeSelected(theme) => self.handle_settings_theme_selected(theme),
            Message::SaveSettings => self.handle_save_settings(),
            Message::CancelSettings => self.handle_cancel_settings(),

            // Keyboard and window events
            Message::Event(event) => self.handle_keyboard_event(event),
            Message::TabPressed => self.handle_tab_navigation(),
            Message::LoginTabPressed => self.handle_login_tab_pressed(),
            Message::LoginFocusResult(username, password) => {
                self.handle_login_focus_result(username, password)
            }
            Message::UsersCreateTabPressed => self.handle_users_create_tab_pressed(),
            Message::UsersCreateFocusResult(username, password) => {
                self.handle_users_create_focus_result(username, password)
            }
            Message::AccountTabPressed => self.handle_account_tab_pressed(),
            Message::AccountFocusResult(current, new, confirm) => {
                self.handle_account_focus_result(current, new, confirm)
            }
            Message::SuccessNoticeElapsed => self.handle_success_notice_elapsed(),
            Message::DismissNotice => self.handle_dismiss_notice(),
            Message::WindowCloseRequested(id) => {
                // Query window size and position, then save and close
                iced::window::size(id).then(move |size| {
                    iced::window::position(id).map(move |point| Message::WindowSaveAndClose {
                        id,
                        width: size.width,
                        height: size.height,
                        x: point.map(|p| p.x as i32),
                        y: point.map(|p| p.y as i32),
                    })
                })
            }
            Message::WindowSaveAndClose {
                id,
                width,
                height,
                x,
                y,
            } => self.handle_window_save_and_close(id, width, height, x, y),
        }
    }

    /// Set up subscriptions for keyboard and window events
    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            // Keyboard events for form navigation and panel dismissal
            iced::event::listen().map(Message::Event),
            // Window close requests (we handle saving before exit)
            iced::window::close_requests().map(Message::WindowCloseRequested),
        ])
    }

    /// Render the current application state to the UI
    ///
    /// Delegates to `views::main_layout()` for all rendering logic.
    fn view(&self) -> Element<'_, Message> {
        let config = ViewConfig {
            theme: self.theme(),
            auth_state: self.auth_state,
            profile: self.profile.as_ref(),
            login_form: &self.login_form,
            files: &self.files,
            users: &self.users,
            account_form: &self.account_form,
            settings_form: self.settings_form.as_ref(),
            settings: &self.config.settings,
            active_panel: self.active_panel,
            overlay: self.overlay.as_ref(),
            notice: self.notice.as_deref(),
        };

        views::main_layout(config)
    }

    fn theme(&self) -> Theme {
        self.config.settings.theme.to_iced_theme()
    }
}
