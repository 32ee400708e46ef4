//! Sequential upload batch tracking

use std::collections::VecDeque;
use std::path::PathBuf;

/// An in-progress multi-file upload
///
/// Files are sent one at a time; the next request is only issued after
/// the previous response arrives. Failures are collected per file and
/// the batch keeps going, so one rejected file does not stop the rest.
#[derive(Debug, Clone)]
pub struct UploadBatch {
    /// Files not yet attempted, in selection order
    pending: VecDeque<PathBuf>,
    /// Shared flag captured when the batch started
    shared: bool,
    /// Number of files attempted so far
    attempted: usize,
    /// Failure messages, one per failed file
    failures: Vec<String>,
}

impl UploadBatch {
    /// Start a batch from the picked paths
    pub fn new(paths: Vec<PathBuf>, shared: bool) -> Self {
        Self {
            pending: paths.into(),
            shared,
            attempted: 0,
            failures: Vec::new(),
        }
    }

    /// Shared flag for every file in this batch
    ///
    /// Captured once at batch start; toggling the checkbox mid-upload
    /// does not affect files already queued.
    pub fn shared(&self) -> bool {
        self.shared
    }

    /// Take the next file to upload, marking it attempted
    pub fn take_next(&mut self) -> Option<PathBuf> {
        let next = self.pending.pop_front();
        if next.is_some() {
            self.attempted += 1;
        }
        next
    }

    /// Record a per-file failure message
    pub fn record_failure(&mut self, message: String) {
        self.failures.push(message);
    }

    /// Number of files attempted so far
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of files that uploaded successfully
    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }

    /// Whether every attempted file succeeded
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Consume the batch, yielding the collected failure messages
    pub fn into_failures(self) -> Vec<String> {
        self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_batch_yields_files_in_selection_order() {
        let mut batch = UploadBatch::new(paths(&["a.txt", "b.txt", "c.txt"]), false);
        assert_eq!(batch.take_next(), Some(PathBuf::from("a.txt")));
        assert_eq!(batch.take_next(), Some(PathBuf::from("b.txt")));
        assert_eq!(batch.take_next(), Some(PathBuf::from("c.txt")));
        assert_eq!(batch.take_next(), None);
        assert_eq!(batch.attempted(), 3);
    }

    #[test]
    fn test_batch_attempts_every_file_despite_failures() {
        // Three files, middle one fails: all three are still attempted
        let mut batch = UploadBatch::new(paths(&["a.txt", "b.txt", "c.txt"]), false);
        batch.take_next();
        batch.take_next();
        batch.record_failure("Failed to upload b.txt: too large".to_string());
        batch.take_next();
        assert_eq!(batch.take_next(), None);
        assert_eq!(batch.attempted(), 3);
        assert_eq!(batch.succeeded(), 2);
        assert!(!batch.all_succeeded());
        assert_eq!(
            batch.into_failures(),
            vec!["Failed to upload b.txt: too large".to_string()]
        );
    }

    #[test]
    fn test_batch_all_succeeded_when_no_failures() {
        let mut batch = UploadBatch::new(paths(&["a.txt", "b.txt"]), false);
        while batch.take_next().is_some() {}
        assert!(batch.all_succeeded());
        assert_eq!(batch.succeeded(), 2);
    }

    #[test]
    fn test_batch_shared_flag_is_fixed_at_start() {
        let mut batch = UploadBatch::new(paths(&["a.txt", "b.txt"]), true);
        assert!(batch.shared());
        batch.take_next();
        // Flag is the same for every file in the batch
        assert!(batch.shared());
    }

    #[test]
    fn test_empty_batch_is_immediately_done() {
        let mut batch = UploadBatch::new(Vec::new(), false);
        assert_eq!(batch.take_next(), None);
        assert_eq!(batch.attempted(), 0);
        assert!(batch.all_succeeded());
    }
}
