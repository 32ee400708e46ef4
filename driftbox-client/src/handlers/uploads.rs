//! Upload batch handlers
//!
//! Uploads go up strictly one at a time: each file is a separate request,
//! sent in the order the picker returned them, and the next request does
//! not start until the previous one finished. Failures are collected per
//! file and the batch always ends in a single listing refresh.

use std::path::PathBuf;

use iced::Task;
use rfd::AsyncFileDialog;

use crate::DriftboxApp;
use crate::api::ApiError;
use crate::types::{Message, UploadBatch};

impl DriftboxApp {
    // ==================== Picker ====================

    /// Handle upload button press (opens the file picker)
    pub fn handle_upload_pressed(&mut self) -> Task<Message> {
        if self.upload.is_some() {
            return Task::none();
        }

        Task::future(async move {
            let files = AsyncFileDialog::new()
                .set_title("Select files to upload")
                .pick_files()
                .await;
            match files {
                Some(handles) => Message::UploadFilesPicked(
                    handles
                        .into_iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect(),
                ),
                None => Message::UploadPickerCancelled,
            }
        })
    }

    /// Handle the shared upload checkbox toggle
    pub fn handle_upload_shared_toggled(&mut self, shared: bool) -> Task<Message> {
        self.files.upload_shared = shared;
        Task::none()
    }

    /// Handle files coming back from the picker
    ///
    /// The shared flag is captured into the batch here; toggling the
    /// checkbox mid-batch does not affect files already queued.
    pub fn handle_upload_files_picked(&mut self, paths: Vec<PathBuf>) -> Task<Message> {
        if paths.is_empty() || self.upload.is_some() {
            return Task::none();
        }

        self.files.clear_action_state();
        self.upload = Some(UploadBatch::new(paths, self.files.upload_shared));
        self.show_loading("Uploading files...");
        self.advance_upload()
    }

    // ==================== Batch Progression ====================

    /// Send the next queued file, or finish the batch
    pub fn advance_upload(&mut self) -> Task<Message> {
        // Logging out drops the batch, so a missing token here ends it too
        let token = match self.require_token() {
            Ok(token) => token,
            Err(task) => return task,
        };
        let Some(batch) = self.upload.as_mut() else {
            return Task::none();
        };

        match batch.take_next() {
            Some(path) => {
                let shared = batch.shared();
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let api = self.api.clone();
                Task::future(async move {
                    let result = api.upload_file(&token, &path, shared).await;
                    Message::UploadFileResult { filename, result }
                })
            }
            None => self.finish_upload(),
        }
    }

    /// Handle a single file's upload result, then continue the batch
    ///
    /// A rejected session aborts the rest of the batch; every other failure
    /// is recorded against its filename and the batch moves on.
    pub fn handle_upload_file_result(
        &mut self,
        filename: String,
        result: Result<(), ApiError>,
    ) -> Task<Message> {
        if matches!(&result, Err(e) if e.is_session_expired()) {
            self.upload = None;
            return self.handle_session_expired();
        }

        let Some(batch) = self.upload.as_mut() else {
            return Task::none();
        };
        if let Err(e) = result {
            batch.record_failure(format!("Failed to upload {}: {}", filename, e));
        }
        self.advance_upload()
    }

    /// Dissolve the finished batch and refresh the listings
    ///
    /// The success notice is deferred until the refreshed lists arrive, so
    /// it never shows over stale rows.
    fn finish_upload(&mut self) -> Task<Message> {
        let Some(batch) = self.upload.take() else {
            return Task::none();
        };

        tracing::info!(
            "Upload batch finished: {} of {} succeeded",
            batch.succeeded(),
            batch.attempted()
        );
        self.upload_success_pending = batch.all_succeeded();
        self.files.upload_errors = batch.into_failures();
        self.refresh_file_lists("Loading files...")
    }
}
