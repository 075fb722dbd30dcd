//! Create and edit form for a project header.
//!
//! With an `id` the page edits that project; a project that already has
//! submissions is refused on save and left untouched.

use common::model::Template;
use common::workspace::ProjectDraft;
use common::FormError;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::widgets::{icon_button, link_button, missing_card, page_header};
use crate::helpers::{now, toast_error, toast_success};
use crate::routes::Route;
use crate::storage;

pub enum Msg {
    SetName(String),
    SetDescription(String),
    SelectTemplate(String),
    Save,
}

#[derive(Properties, PartialEq)]
pub struct ProjectEditorProps {
    #[prop_or_default]
    pub id: Option<String>,
}

pub struct ProjectEditorPage {
    templates: Vec<Template>,
    draft: ProjectDraft,
    /// Set when editing an id that has no record.
    missing: bool,
    locked: bool,
}

impl ProjectEditorPage {
    fn load(id: Option<&str>) -> Self {
        let ws = storage::workspace();
        let templates = ws.templates();
        let Some(id) = id else {
            return Self {
                templates,
                draft: ProjectDraft::default(),
                missing: false,
                locked: false,
            };
        };
        match ws.project(id) {
            Ok(project) => Self {
                templates,
                draft: ProjectDraft::from_project(&project),
                missing: false,
                locked: ws.is_locked(id),
            },
            Err(_) => Self {
                templates,
                draft: ProjectDraft::default(),
                missing: true,
                locked: false,
            },
        }
    }

    fn save(&self, id: Option<&str>) -> Result<(), FormError> {
        let ws = storage::workspace();
        match id {
            Some(id) => ws.update_project(id, &self.draft).map(|_| ()),
            None => ws.create_project(&self.draft, now()).map(|_| ()),
        }
    }
}

impl Component for ProjectEditorPage {
    type Message = Msg;
    type Properties = ProjectEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::load(ctx.props().id.as_deref())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            *self = Self::load(ctx.props().id.as_deref());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => self.draft.name = name,
            Msg::SetDescription(description) => self.draft.description = description,
            Msg::SelectTemplate(template_id) => self.draft.template_id = template_id,
            Msg::Save => {
                let id = ctx.props().id.as_deref();
                match self.save(id) {
                    Ok(()) => {
                        let message = if id.is_some() {
                            "Project updated successfully"
                        } else {
                            "Project created successfully"
                        };
                        toast_success(message);
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push(&Route::Projects);
                        }
                    }
                    Err(e) => toast_error(&e),
                }
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let editing = ctx.props().id.is_some();
        let title = if editing { "Edit Project" } else { "Create Project" };

        if self.missing {
            return html! {
                <div>
                    { page_header(title, "", Some(Route::Projects), html! {}) }
                    { missing_card("Project not found or loading...") }
                </div>
            };
        }

        let link = ctx.link();
        let save_label = if editing { "Update Project" } else { "Save Project" };
        html! {
            <div>
                {
                    page_header(
                        title,
                        "Bind a template to a name and start collecting submissions",
                        Some(Route::Projects),
                        icon_button("save", save_label, link.callback(|_| Msg::Save), false),
                    )
                }
                {
                    if self.locked {
                        html! {
                            <div class="card">
                                <p class="muted">{"This project already has submissions and can no longer be edited."}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="card">
                    <div class="form-row">
                        <label for="project-name">{"Name"}<span class="required-mark">{"*"}</span></label>
                        <input
                            id="project-name"
                            class="input"
                            placeholder="e.g. Q1 Survey"
                            value={self.draft.name.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                    <div class="form-row">
                        <label for="project-description">{"Description"}</label>
                        <textarea
                            id="project-description"
                            class="input"
                            rows="3"
                            value={self.draft.description.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                            })}
                        />
                    </div>
                    { self.template_picker(link) }
                </div>
            </div>
        }
    }
}

impl ProjectEditorPage {
    fn template_picker(&self, link: &Scope<Self>) -> Html {
        if self.templates.is_empty() {
            return html! {
                <div class="form-row">
                    <label>{"Template"}<span class="required-mark">{"*"}</span></label>
                    <p class="muted">{"No templates available. Create one first."}</p>
                    <div>{ link_button(Route::CreateTemplate, "add", "Create Template", true) }</div>
                </div>
            };
        }
        html! {
            <div class="form-row">
                <label for="project-template">{"Template"}<span class="required-mark">{"*"}</span></label>
                <select
                    id="project-template"
                    class="input"
                    onchange={link.callback(|e: Event| {
                        Msg::SelectTemplate(e.target_unchecked_into::<HtmlSelectElement>().value())
                    })}
                >
                    <option value="" disabled=true selected={self.draft.template_id.is_empty()}>
                        {"Select a template"}
                    </option>
                    {
                        for self.templates.iter().map(|template| html! {
                            <option
                                value={template.id.clone()}
                                selected={template.id == self.draft.template_id}
                            >
                                {template.name.clone()}
                            </option>
                        })
                    }
                </select>
            </div>
        }
    }
}
