//! Type definitions for the Driftbox client

mod files;
mod form;
mod message;
mod ui;
mod upload;
mod view_config;

// Re-export types for convenience
pub use files::{FileListState, FileListSlot, PendingFileDelete};
pub use form::{
    AccountFormState, LoginFormState, SettingsFormState, UserManagementMode, UserManagementState,
};
pub use message::Message;
pub use ui::{ActivePanel, AuthState, InputId, Overlay};
pub use upload::UploadBatch;
pub use view_config::{ToolbarState, ViewConfig};
