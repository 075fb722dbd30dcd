//! Editable drafts behind the template builder and the project form.

use crate::error::{FormError, Result};
use crate::model::{Field, FieldKind, Project, new_id};

/// The field currently being composed in the template builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub options: Vec<String>,
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self {
            label: String::new(),
            kind: FieldKind::Text,
            required: false,
            options: Vec::new(),
        }
    }
}

/// Unsaved template: header, the fields added so far and the field in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDraft {
    pub name: String,
    pub description: String,
    pub fields: Vec<Field>,
    pub current: FieldDraft,
    /// Text of the option input box, appended by `add_option`.
    pub pending_option: String,
}

impl TemplateDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the trimmed pending option to the field in progress and clears
    /// the input. Blank input is ignored.
    pub fn add_option(&mut self) -> bool {
        let option = self.pending_option.trim();
        if option.is_empty() {
            return false;
        }
        self.current.options.push(option.to_string());
        self.pending_option.clear();
        true
    }

    pub fn remove_option(&mut self, index: usize) {
        if index < self.current.options.len() {
            self.current.options.remove(index);
        }
    }

    /// Turns the field in progress into a field with a fresh id and resets
    /// the builder. A blank label adds nothing.
    pub fn add_field(&mut self) -> Option<&Field> {
        if self.current.label.trim().is_empty() {
            return None;
        }
        let draft = std::mem::take(&mut self.current);
        let options = draft.kind.uses_options().then_some(draft.options);
        self.fields.push(Field {
            id: new_id(),
            label: draft.label,
            kind: draft.kind,
            required: draft.required,
            options,
        });
        self.fields.last()
    }

    pub fn remove_field(&mut self, field_id: &str) {
        self.fields.retain(|field| field.id != field_id);
    }

    /// Checks the draft can be saved.
    pub fn check(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingTemplateName);
        }
        if self.fields.is_empty() {
            return Err(FormError::EmptyTemplate);
        }
        Ok(())
    }
}

/// Unsaved project header, used for both create and edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    /// Selected template id, empty when nothing is selected.
    pub template_id: String,
}

impl ProjectDraft {
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            template_id: project.template_id.clone(),
        }
    }

    pub fn check(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingProjectName);
        }
        if self.template_id.is_empty() {
            return Err(FormError::MissingTemplateSelection);
        }
        Ok(())
    }
}
