//! Overlay, notice, and window handlers

use std::time::Duration;

use iced::Task;

use crate::DriftboxApp;
use crate::constants::SUCCESS_OVERLAY_SECS;
use crate::types::{Message, Overlay};

impl DriftboxApp {
    // ==================== Overlay Helpers ====================

    /// Put up a loading overlay naming the operation in flight
    ///
    /// Starting a new operation replaces whatever the overlay showed
    /// before; overlays never stack.
    pub fn show_loading(&mut self, message: &str) {
        self.overlay = Some(Overlay::Loading(message.to_string()));
    }

    /// Clear the overlay if it is a loading overlay
    ///
    /// Success notices are left alone; their own timer dismisses them.
    pub fn clear_loading_overlay(&mut self) {
        if self.overlay.as_ref().is_some_and(|o| o.is_loading()) {
            self.overlay = None;
        }
    }

    /// Show a success notice and schedule its dismissal
    pub fn show_success(&mut self, message: &str) -> Task<Message> {
        self.overlay = Some(Overlay::Success(message.to_string()));
        Task::perform(tokio::time::sleep(Duration::from_secs(SUCCESS_OVERLAY_SECS)), |_| {
            Message::SuccessNoticeElapsed
        })
    }

    /// Handle expiry of a success notice timer
    ///
    /// Only a success overlay is cleared here; a loading overlay from an
    /// operation started after the notice must survive a stale timer.
    pub fn handle_success_notice_elapsed(&mut self) -> Task<Message> {
        if matches!(self.overlay, Some(Overlay::Success(_))) {
            self.overlay = None;
        }
        Task::none()
    }

    // ==================== Notices ====================

    /// Handle dismissal of the notice bar
    pub fn handle_dismiss_notice(&mut self) -> Task<Message> {
        self.notice = None;
        Task::none()
    }

    // ==================== Window ====================

    /// Persist window geometry and any pending session change, then close
    ///
    /// Runs after the close request queried size and position; this is the
    /// last code before the process exits.
    pub fn handle_window_save_and_close(
        &mut self,
        id: iced::window::Id,
        width: f32,
        height: f32,
        x: Option<i32>,
        y: Option<i32>,
    ) -> Task<Message> {
        self.config.settings.window_width = width;
        self.config.settings.window_height = height;
        self.config.settings.window_x = x;
        self.config.settings.window_y = y;
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config on exit: {}", e);
        }
        if let Err(e) = self.session.save() {
            tracing::warn!("Failed to save session on exit: {}", e);
        }

        iced::window::close(id)
    }
}
