//! Shared core of the form-template manager.
//!
//! Everything here is independent of the browser so it can be unit tested on
//! the host and reused by any front end:
//!
//! - `model`: the persisted records (`Template`, `Project`, `FormSubmission`)
//!   and the `Field` descriptor with its closed set of `FieldKind`s.
//! - `form`: the renderer logic. Maps a field to the control that edits it,
//!   coerces user input into `FieldValue`s and validates required fields.
//! - `storage`: the repository over a raw key-value backend, with the JSON
//!   collection encoding and an in-memory backend.
//! - `workspace`: the page-controller operations (create template, edit
//!   project, submit form, ...) expressed against any repository.
//! - `display`: read-only formatting of submitted values.
//! - `attachments`: session index of live file handles per submission field.

pub mod attachments;
pub mod display;
pub mod error;
pub mod form;
pub mod model;
pub mod storage;
pub mod workspace;

pub use error::{FormError, RecordKind, Result, StorageError, ValidationError};
