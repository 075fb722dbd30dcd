//! Error types shared by the repository and the workspace operations.

use std::fmt;

use thiserror::Error;

/// Which kind of record a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Template,
    Project,
    Submission,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Template => "Template",
            RecordKind::Project => "Project",
            RecordKind::Submission => "Submission",
        };
        f.write_str(name)
    }
}

/// Failure of the raw key-value backend or of the JSON encoding in front of it.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A record could not be encoded to JSON.
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backend refused the write (quota exceeded, storage disabled, ...).
    #[error("storage rejected write to {key}: {reason}")]
    Backend { key: String, reason: String },

    /// The stored value is not a JSON array, so it is left as is.
    #[error("{key} does not hold a record list; refusing to overwrite it")]
    NotAList { key: String },
}

/// Required fields that were left empty on a submit attempt.
///
/// Labels are kept in template order. The display form joins one
/// `"<label> is required"` message per label with `", "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub missing: Vec<String>,
}

impl ValidationError {
    pub fn labels(&self) -> &[String] {
        &self.missing
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.missing.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} is required", label)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Everything a workspace operation can fail with.
///
/// None of these are fatal: callers show the message and keep their state.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Template name is required")]
    MissingTemplateName,

    #[error("Add at least one field to your template")]
    EmptyTemplate,

    #[error("Project name is required")]
    MissingProjectName,

    #[error("Please select a template")]
    MissingTemplateSelection,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{kind} not found")]
    NotFound { kind: RecordKind, id: String },

    /// A project with at least one submission can no longer be edited.
    #[error("Can not edit the project. Already project have submissions")]
    ProjectLocked { id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl FormError {
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        FormError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Short heading used when the error is shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            FormError::Validation(_) => "Validation Error",
            FormError::Storage(_) => "Storage Error",
            _ => "Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
