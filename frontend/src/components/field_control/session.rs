use common::form::{FieldInput, FormValues};
use common::model::Template;
use log::debug;

use super::FieldEvent;
use crate::attachments;

/// A form being filled for one template.
///
/// Keeps the typed values and a generation counter. The counter is bumped on
/// reset and used as the key of the form rows, so the browser drops whatever
/// it still shows in uncontrolled inputs (file pickers). Picked files are
/// staged in the session file store until the submission is stored.
pub struct FormSession {
    pub template: Template,
    pub values: FormValues,
    pub generation: u32,
}

impl FormSession {
    pub fn new(template: Template) -> Self {
        attachments::discard_staged();
        let values = FormValues::initial_for(&template);
        Self {
            template,
            values,
            generation: 0,
        }
    }

    /// Applies one control event. Returns whether anything changed.
    pub fn handle(&mut self, field_id: &str, event: FieldEvent) -> bool {
        let Some(field) = self.template.field(field_id).cloned() else {
            debug!("event for unknown field {}", field_id);
            return false;
        };
        match event {
            FieldEvent::Changed(input) => self.values.apply(&field, input),
            FieldEvent::Picked(meta, file) => {
                let applied = self.values.apply(&field, FieldInput::File(meta));
                if applied {
                    attachments::stage(&field.id, file);
                }
                applied
            }
        }
    }

    /// Back to empty values, dropping staged files.
    pub fn reset(&mut self) {
        self.values = FormValues::initial_for(&self.template);
        attachments::discard_staged();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Files the staged pickers under a stored submission and clears the form.
    pub fn submitted(&mut self, submission_id: &str) {
        let committed = attachments::commit(submission_id);
        debug!("kept {} file(s) for submission {}", committed, submission_id);
        self.values = FormValues::initial_for(&self.template);
        self.generation = self.generation.wrapping_add(1);
    }
}
