//! File browser state

use driftbox_common::api::FileRecord;

/// Outcome slot for a fetched file list
///
/// None = request in flight (or never issued), Some(Ok) = loaded,
/// Some(Err) = fetch failed with a display message.
pub type FileListSlot = Option<Result<Vec<FileRecord>, String>>;

/// A delete awaiting user confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFileDelete {
    /// Server id of the file
    pub id: String,
    /// Filename shown in the confirmation prompt
    pub filename: String,
}

/// State for the file browser: both lists, search, and upload inputs
#[derive(Debug, Clone, Default)]
pub struct FileListState {
    /// Files owned by the signed-in account
    pub my_files: FileListSlot,
    /// Files other accounts have shared
    pub shared_files: FileListSlot,
    /// Current search keyword (empty = full listing)
    pub search_keyword: String,
    /// Whether newly uploaded files should be shared
    pub upload_shared: bool,
    /// Per-file failure messages from the last upload batch
    pub upload_errors: Vec<String>,
    /// Error from the last download or delete attempt
    pub action_error: Option<String>,
    /// Delete awaiting confirmation, if any
    pub pending_delete: Option<PendingFileDelete>,
}

impl FileListState {
    /// Clear errors left over from previous uploads, downloads, and deletes
    ///
    /// Inputs and the loaded lists are untouched, so starting a new action
    /// does not blank the view.
    pub fn clear_action_state(&mut self) {
        self.upload_errors.clear();
        self.action_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_action_state() {
        let mut state = FileListState {
            upload_errors: vec!["Failed to upload a.txt: too large".to_string()],
            action_error: Some("Failed to delete file".to_string()),
            search_keyword: "report".to_string(),
            upload_shared: true,
            ..Default::default()
        };
        state.clear_action_state();
        assert!(state.upload_errors.is_empty());
        assert!(state.action_error.is_none());
        // Inputs are preserved
        assert_eq!(state.search_keyword, "report");
        assert!(state.upload_shared);
    }

    #[test]
    fn test_default_lists_are_unloaded() {
        let state = FileListState::default();
        assert!(state.my_files.is_none());
        assert!(state.shared_files.is_none());
        assert!(state.pending_delete.is_none());
    }
}
