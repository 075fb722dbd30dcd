use common::model::{FormSubmission, Project};
use log::warn;

use crate::components::field_control::FormSession;
use crate::helpers::revoke_object_url;
use crate::storage;

/// A file shown in the preview sheet.
pub struct Preview {
    pub name: String,
    pub url: String,
    pub is_image: bool,
}

pub struct ProjectDetailPage {
    pub project: Option<Project>,
    /// Entry row bound to the project's template.
    pub session: Option<FormSession>,
    pub submissions: Vec<FormSubmission>,
    pub preview: Option<Preview>,
}

impl ProjectDetailPage {
    pub fn load(project_id: &str) -> Self {
        let ws = storage::workspace();
        match ws.project_with_template(project_id) {
            Ok((project, template)) => Self {
                submissions: ws.submissions_for(&project.id),
                project: Some(project),
                session: Some(FormSession::new(template)),
                preview: None,
            },
            Err(e) => {
                warn!("project detail: {}", e);
                Self {
                    project: None,
                    session: None,
                    submissions: Vec::new(),
                    preview: None,
                }
            }
        }
    }

    pub fn reload_submissions(&mut self) {
        if let Some(project) = &self.project {
            self.submissions = storage::workspace().submissions_for(&project.id);
        }
    }

    /// Hides the preview and releases its object URL.
    pub fn close_preview(&mut self) {
        if let Some(preview) = self.preview.take() {
            revoke_object_url(&preview.url);
        }
    }
}
