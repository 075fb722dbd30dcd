//! Session index of live file handles.
//!
//! Stored submissions keep only file metadata. The file itself (a browser
//! `File` in the frontend) is kept here for the lifetime of the page so it
//! can be previewed. Handles are staged per field while the form is being
//! filled and committed under the submission id once it is stored, so a
//! template with several file fields keeps one file per field.

use std::collections::HashMap;

/// Identifies one file field of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentKey {
    pub submission_id: String,
    pub field_id: String,
}

impl AttachmentKey {
    pub fn new(submission_id: impl Into<String>, field_id: impl Into<String>) -> Self {
        Self {
            submission_id: submission_id.into(),
            field_id: field_id.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Attachments<T> {
    staged: HashMap<String, T>,
    committed: HashMap<AttachmentKey, T>,
}

impl<T> Default for Attachments<T> {
    fn default() -> Self {
        Self {
            staged: HashMap::new(),
            committed: HashMap::new(),
        }
    }
}

impl<T> Attachments<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds `handle` for `field_id` of the form being filled, replacing any
    /// earlier pick for that field.
    pub fn stage(&mut self, field_id: impl Into<String>, handle: T) {
        self.staged.insert(field_id.into(), handle);
    }

    pub fn staged(&self, field_id: &str) -> Option<&T> {
        self.staged.get(field_id)
    }

    /// Drops staged handles, e.g. when the form is reset.
    pub fn discard_staged(&mut self) {
        self.staged.clear();
    }

    /// Moves every staged handle under `submission_id`. Returns how many were
    /// committed.
    pub fn commit(&mut self, submission_id: &str) -> usize {
        let count = self.staged.len();
        for (field_id, handle) in self.staged.drain() {
            self.committed
                .insert(AttachmentKey::new(submission_id, field_id), handle);
        }
        count
    }

    pub fn get(&self, submission_id: &str, field_id: &str) -> Option<&T> {
        self.committed
            .get(&AttachmentKey::new(submission_id, field_id))
    }

    /// Committed handles of one submission, ordered by field id.
    pub fn for_submission(&self, submission_id: &str) -> Vec<(&str, &T)> {
        let mut found: Vec<(&str, &T)> = self
            .committed
            .iter()
            .filter(|(key, _)| key.submission_id == submission_id)
            .map(|(key, handle)| (key.field_id.as_str(), handle))
            .collect();
        found.sort_by(|a, b| a.0.cmp(b.0));
        found
    }
}
