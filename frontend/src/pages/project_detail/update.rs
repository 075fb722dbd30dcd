use common::model::FieldValue;
use log::debug;
use yew::prelude::*;

use crate::attachments;
use crate::helpers::{now, object_url, toast_error, toast_success};
use crate::storage;

use super::messages::Msg;
use super::state::{Preview, ProjectDetailPage};

pub fn update(page: &mut ProjectDetailPage, _ctx: &Context<ProjectDetailPage>, msg: Msg) -> bool {
    match msg {
        Msg::Field(field_id, event) => match page.session.as_mut() {
            Some(session) => session.handle(&field_id, event),
            None => false,
        },
        Msg::Submit => {
            let (Some(project), Some(session)) = (&page.project, page.session.as_mut()) else {
                return false;
            };
            match storage::workspace().submit(&project.id, &session.values, now()) {
                Ok(submission) => {
                    session.submitted(&submission.id);
                    toast_success("Form submitted successfully");
                    page.reload_submissions();
                    true
                }
                Err(e) => {
                    toast_error(&e);
                    false
                }
            }
        }
        Msg::OpenPreview {
            submission_id,
            field_id,
        } => {
            let Some(file) = attachments::get(&submission_id, &field_id) else {
                debug!("no file kept for {}/{}", submission_id, field_id);
                return false;
            };
            let Some(url) = object_url(&file) else {
                return false;
            };
            let meta = page
                .submissions
                .iter()
                .find(|s| s.id == submission_id)
                .and_then(|s| s.values.get(&field_id))
                .and_then(FieldValue::as_file);
            let is_image = meta.map_or_else(|| file.type_().starts_with("image/"), |m| m.is_image());
            page.close_preview();
            page.preview = Some(Preview {
                name: file.name(),
                url,
                is_image,
            });
            true
        }
        Msg::ClosePreview => {
            page.close_preview();
            true
        }
    }
}
