//! Records persisted by the application and the field descriptors inside them.

pub mod field;
pub mod project;
pub mod submission;
pub mod template;
pub mod value;

pub use field::{Field, FieldKind};
pub use project::Project;
pub use submission::FormSubmission;
pub use template::Template;
pub use value::{FieldValue, FileRef};

/// Generates a fresh record identifier (random UUID v4).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
