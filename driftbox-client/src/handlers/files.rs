//! File listing, search, download, and delete handlers

use std::path::{Path, PathBuf};

use iced::Task;

use crate::DriftboxApp;
use crate::api::ApiError;
use crate::config::settings::default_download_path;
use crate::types::{InputId, Message, PendingFileDelete};
use driftbox_common::api::FileRecord;

impl DriftboxApp {
    // ==================== Search ====================

    /// Handle search keyword field change
    pub fn handle_search_keyword_changed(&mut self, keyword: String) -> Task<Message> {
        self.files.search_keyword = keyword;
        self.focused_field = InputId::SearchKeyword;
        Task::none()
    }

    /// Handle search submit (button or Enter in the search field)
    ///
    /// An empty keyword is a plain refresh and labels the overlay
    /// accordingly. Both lists are filtered by the same keyword.
    pub fn handle_search_submitted(&mut self) -> Task<Message> {
        if self.files.search_keyword.trim().is_empty() {
            self.refresh_file_lists("Loading files...")
        } else {
            self.refresh_file_lists("Searching files...")
        }
    }

    // ==================== Listing ====================

    /// Start a refresh of both lists under a loading overlay
    pub fn refresh_file_lists(&mut self, overlay_message: &str) -> Task<Message> {
        self.show_loading(overlay_message);
        self.load_files_task()
    }

    /// Fetch both listings in one task, own files first
    ///
    /// The shared fetch is skipped when the own-files fetch fails, so one
    /// broken server answer produces one error instead of two.
    pub fn load_files_task(&mut self) -> Task<Message> {
        let token = match self.require_token() {
            Ok(token) => token,
            Err(task) => return task,
        };

        let api = self.api.clone();
        let keyword = self.files.search_keyword.trim().to_string();
        Task::perform(
            async move {
                let mine = api.files(&token, false, &keyword).await;
                let shared = if mine.is_ok() {
                    Some(api.files(&token, true, &keyword).await)
                } else {
                    None
                };
                (mine, shared)
            },
            |(mine, shared)| Message::FilesLoaded { mine, shared },
        )
    }

    /// Handle arrival of both file listings
    ///
    /// Stores each list slot, logs records the UI cannot act on, and
    /// resolves the overlay: a pending upload batch turns into its success
    /// notice here, after the refreshed lists are in.
    pub fn handle_files_loaded(
        &mut self,
        mine: Result<Vec<FileRecord>, ApiError>,
        shared: Option<Result<Vec<FileRecord>, ApiError>>,
    ) -> Task<Message> {
        let expired = matches!(&mine, Err(e) if e.is_session_expired())
            || matches!(&shared, Some(Err(e)) if e.is_session_expired());
        if expired {
            return self.handle_session_expired();
        }

        if let Ok(records) = &mine {
            Self::warn_missing_ids("own", records);
        }
        if let Some(Ok(records)) = &shared {
            Self::warn_missing_ids("shared", records);
        }

        match mine {
            Ok(records) => {
                self.files.my_files = Some(Ok(records));
            }
            Err(e) => {
                // One refresh, one failure: the shared slot was never
                // fetched, so it carries the same error.
                let message = e.to_string();
                self.files.my_files = Some(Err(message.clone()));
                self.files.shared_files = Some(Err(message));
            }
        }
        if let Some(shared) = shared {
            self.files.shared_files = Some(shared.map_err(|e| e.to_string()));
        }

        if self.upload_success_pending {
            self.upload_success_pending = false;
            return self.show_success("Upload successful!");
        }
        self.clear_loading_overlay();
        Task::none()
    }

    /// Log listings that contain records without a usable identifier
    ///
    /// Such rows render without download or delete buttons; the log entry
    /// is the only place the gap is reported.
    fn warn_missing_ids(list: &str, records: &[FileRecord]) {
        let missing = records
            .iter()
            .filter(|record| record.resolved_id().is_none())
            .count();
        if missing > 0 {
            tracing::warn!(
                "{} record(s) in the {} file list have no usable identifier",
                missing,
                list
            );
        }
    }

    // ==================== Download ====================

    /// Handle download button press on a file row
    ///
    /// Writes into the configured download folder, falling back to the
    /// system downloads directory. Success is silent; the file simply
    /// appears on disk.
    pub fn handle_file_download_clicked(&mut self, id: String, filename: String) -> Task<Message> {
        let token = match self.require_token() {
            Ok(token) => token,
            Err(task) => return task,
        };

        let Some(dir) = self
            .config
            .settings
            .download_path
            .clone()
            .or_else(default_download_path)
        else {
            self.files.action_error =
                Some("Could not determine a download folder. Set one in Settings.".to_string());
            return Task::none();
        };

        self.files.action_error = None;
        self.show_loading("Preparing download...");

        // Server-supplied names are not trusted as paths
        let safe_name = Path::new(&filename)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "download".to_string());
        let dest = PathBuf::from(dir).join(safe_name);

        let api = self.api.clone();
        Task::future(async move {
            let result = api.download_file(&token, &id, &dest).await.map(|_| dest);
            Message::FileDownloadResult { filename, result }
        })
    }

    /// Handle download completion
    pub fn handle_file_download_result(
        &mut self,
        filename: String,
        result: Result<PathBuf, ApiError>,
    ) -> Task<Message> {
        match result {
            Ok(dest) => {
                tracing::info!("Downloaded {} to {}", filename, dest.display());
                self.clear_loading_overlay();
                Task::none()
            }
            Err(e) if e.is_session_expired() => self.handle_session_expired(),
            Err(e) => {
                self.clear_loading_overlay();
                self.files.action_error = Some(format!("Failed to download {}: {}", filename, e));
                Task::none()
            }
        }
    }

    // ==================== Delete ====================

    /// Handle delete button press on a file row (opens the confirm dialog)
    pub fn handle_file_delete_clicked(&mut self, id: String, filename: String) -> Task<Message> {
        self.files.pending_delete = Some(PendingFileDelete { id, filename });
        Task::none()
    }

    /// Handle delete confirmation
    pub fn handle_file_confirm_delete(&mut self) -> Task<Message> {
        let Some(pending) = self.files.pending_delete.take() else {
            return Task::none();
        };
        let token = match self.require_token() {
            Ok(token) => token,
            Err(task) => return task,
        };

        self.files.action_error = None;
        self.show_loading("Deleting file...");

        let api = self.api.clone();
        Task::perform(
            async move { api.delete_file(&token, &pending.id).await },
            Message::FileDeleteResult,
        )
    }

    /// Handle delete dialog cancellation
    pub fn handle_file_cancel_delete(&mut self) -> Task<Message> {
        self.files.pending_delete = None;
        Task::none()
    }

    /// Handle delete completion
    ///
    /// A successful delete refreshes both lists rather than patching the
    /// local copy; the server owns the listing.
    pub fn handle_file_delete_result(&mut self, result: Result<(), ApiError>) -> Task<Message> {
        match result {
            Ok(()) => self.refresh_file_lists("Loading files..."),
            Err(e) if e.is_session_expired() => self.handle_session_expired(),
            Err(e) => {
                self.clear_loading_overlay();
                self.files.action_error = Some(format!("Failed to delete file: {}", e));
                Task::none()
            }
        }
    }
}
