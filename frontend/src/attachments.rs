//! Files picked during this browser session.
//!
//! Only file metadata reaches local storage, so the `File` handles are kept
//! here to preview them later. The store lives as long as the page and is
//! shared by every route, which lets a file submitted from the project form
//! page be previewed on the project detail page.

use std::cell::RefCell;

use common::attachments::Attachments;
use web_sys::File;

thread_local! {
    static FILES: RefCell<Attachments<File>> = RefCell::new(Attachments::new());
}

pub fn stage(field_id: &str, file: File) {
    FILES.with(|files| files.borrow_mut().stage(field_id, file));
}

pub fn discard_staged() {
    FILES.with(|files| files.borrow_mut().discard_staged());
}

pub fn commit(submission_id: &str) -> usize {
    FILES.with(|files| files.borrow_mut().commit(submission_id))
}

pub fn get(submission_id: &str, field_id: &str) -> Option<File> {
    FILES.with(|files| files.borrow().get(submission_id, field_id).cloned())
}

/// Field ids of the files kept for `submission_id`.
pub fn fields_with_files(submission_id: &str) -> Vec<String> {
    FILES.with(|files| {
        files
            .borrow()
            .for_submission(submission_id)
            .into_iter()
            .map(|(field_id, _)| field_id.to_string())
            .collect()
    })
}
