use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::helpers::{now, toast_error, toast_success};
use crate::routes::Route;
use crate::storage;

use super::messages::Msg;
use super::state::TemplateBuilderPage;

/// Applies `msg` to the draft. Returns whether to re-render.
pub fn update(page: &mut TemplateBuilderPage, ctx: &Context<TemplateBuilderPage>, msg: Msg) -> bool {
    let draft = &mut page.draft;
    match msg {
        Msg::SetName(name) => draft.name = name,
        Msg::SetDescription(description) => draft.description = description,
        Msg::SetFieldLabel(label) => draft.current.label = label,
        Msg::SetFieldKind(kind) => draft.current.kind = kind,
        Msg::SetFieldRequired(required) => draft.current.required = required,
        Msg::SetPendingOption(option) => draft.pending_option = option,
        Msg::AddOption => return draft.add_option(),
        Msg::RemoveOption(index) => draft.remove_option(index),
        Msg::AddField => {
            let Some(field) = draft.add_field() else {
                return false;
            };
            debug!("added field {} ({})", field.label, field.kind.tag());
        }
        Msg::RemoveField(field_id) => draft.remove_field(&field_id),
        Msg::Save => {
            match storage::workspace().create_template(draft, now()) {
                Ok(_) => {
                    toast_success("Template created successfully");
                    if let Some(navigator) = ctx.link().navigator() {
                        navigator.push(&Route::Templates);
                    }
                }
                Err(e) => toast_error(&e),
            }
            return false;
        }
    }
    true
}
