//! Message types for the Elm-style architecture

use std::path::PathBuf;

use iced::Theme;

use driftbox_common::api::{FileRecord, UserProfile, UserRecord};

use crate::api::ApiError;

/// Messages that drive the application state machine
#[derive(Debug, Clone)]
pub enum Message {
    // ==================== Session ====================
    /// Login form: Username field changed
    LoginUsernameChanged(String),
    /// Login form: Password field changed
    LoginPasswordChanged(String),
    /// Login form: Log In button pressed (or Enter in a field)
    LoginPressed,
    /// Network: Login attempt completed (token on success)
    LoginResult(Result<String, ApiError>),
    /// Network: Profile fetch completed after login or startup
    UserInfoResult(Result<UserProfile, ApiError>),
    /// Toolbar: Log Out button pressed
    LogoutPressed,

    // ==================== Files ====================
    /// Files: Search keyword input changed
    SearchKeywordChanged(String),
    /// Files: Search submitted (button or Enter in the search field)
    SearchSubmitted,
    /// Network: Both file listings arrived (shared is None when the
    /// first request failed and the second was skipped)
    FilesLoaded {
        mine: Result<Vec<FileRecord>, ApiError>,
        shared: Option<Result<Vec<FileRecord>, ApiError>>,
    },
    /// Files: Download button clicked on a row
    FileDownloadClicked { id: String, filename: String },
    /// Network: Download completed (destination path on success)
    FileDownloadResult {
        filename: String,
        result: Result<PathBuf, ApiError>,
    },
    /// Files: Delete button clicked on a row (opens confirmation)
    FileDeleteClicked { id: String, filename: String },
    /// Files: Confirm delete button pressed in modal
    FileConfirmDelete,
    /// Files: Cancel delete (close modal)
    FileCancelDelete,
    /// Network: Delete request completed
    FileDeleteResult(Result<(), ApiError>),

    // ==================== Uploads ====================
    /// Files: Upload button pressed (open file picker)
    UploadPressed,
    /// Files: Shared checkbox toggled for future uploads
    UploadSharedToggled(bool),
    /// Files: Picker closed with one or more files selected
    UploadFilesPicked(Vec<PathBuf>),
    /// Files: Picker closed without a selection
    UploadPickerCancelled,
    /// Network: One file of the batch finished uploading
    UploadFileResult {
        filename: String,
        result: Result<(), ApiError>,
    },

    // ==================== User Management ====================
    /// Toolbar: Toggle Users panel
    ToggleUsers,
    /// Network: Account listing arrived
    UsersLoaded(Result<Vec<UserRecord>, ApiError>),
    /// Users: Create account button clicked (switch to create form)
    UsersShowCreate,
    /// Users create: Username field changed
    UsersCreateUsernameChanged(String),
    /// Users create: Password field changed
    UsersCreatePasswordChanged(String),
    /// Users create: Admin checkbox toggled
    UsersCreateIsAdminToggled(bool),
    /// Users create: Submit button pressed
    UsersCreatePressed,
    /// Network: Account creation completed
    UsersCreateResult(Result<(), ApiError>),
    /// Users: Cancel button pressed (return to list or close panel)
    UsersCancel,
    /// Users: Delete button clicked on an account row (opens confirmation)
    UsersDeleteClicked(UserRecord),
    /// Users: Confirm delete button pressed in modal
    UsersConfirmDelete,
    /// Users: Cancel delete (close modal)
    UsersCancelDelete,
    /// Network: Account deletion completed
    UsersDeleteResult {
        id: String,
        result: Result<(), ApiError>,
    },

    // ==================== Account ====================
    /// Toolbar: Toggle Account panel
    ToggleAccount,
    /// Account: Current password field changed
    AccountCurrentPasswordChanged(String),
    /// Account: New password field changed
    AccountNewPasswordChanged(String),
    /// Account: Confirm password field changed
    AccountConfirmPasswordChanged(String),
    /// Account: Reset Password button pressed
    AccountResetPressed,
    /// Network: Password reset completed
    AccountResetResult(Result<(), ApiError>),

    // ==================== Settings ====================
    /// Toolbar: Toggle Settings panel
    ToggleSettings,
    /// Settings: Server URL field changed
    SettingsServerUrlChanged(String),
    /// Settings: Browse button pressed for the download directory
    SettingsPickDownloadPath,
    /// Settings: Directory picker closed (None = cancelled)
    SettingsDownloadPathPicked(Option<String>),
    /// Settings: Theme selected from the picker
    SettingsThemeSelected(Theme),
    /// Settings: Save button pressed
    SaveSettings,
    /// Settings: Cancel button pressed (restore snapshot)
    CancelSettings,

    // ==================== Keyboard & Window ====================
    /// Runtime event not captured by any widget (keyboard, window)
    Event(iced::Event),
    /// Keyboard: Tab pressed (cycle focus through the active form)
    TabPressed,
    /// Keyboard: Tab in login form, check which field holds focus
    LoginTabPressed,
    /// Login form focus check result (username, password)
    LoginFocusResult(bool, bool),
    /// Keyboard: Tab in create-user form, check which field holds focus
    UsersCreateTabPressed,
    /// Create-user form focus check result (username, password)
    UsersCreateFocusResult(bool, bool),
    /// Keyboard: Tab in account form, check which field holds focus
    AccountTabPressed,
    /// Account form focus check result (current, new, confirm)
    AccountFocusResult(bool, bool, bool),
    /// Overlay: Success notice display time elapsed
    SuccessNoticeElapsed,
    /// Notice: Dismiss button pressed on the inline notice
    DismissNotice,
    /// Window: Close requested (intercepted to save geometry first)
    WindowCloseRequested(iced::window::Id),
    /// Window: Geometry captured, save config and close
    WindowSaveAndClose {
        id: iced::window::Id,
        width: f32,
        height: f32,
        x: Option<i32>,
        y: Option<i32>,
    },
}
