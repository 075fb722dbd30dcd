//! Stand-alone submission form for one project.

use common::model::Project;
use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::field_control::{FieldControl, FieldEvent, FormSession};
use crate::components::widgets::{icon_button, missing_card, page_header};
use crate::helpers::{now, toast_error, toast_success};
use crate::routes::Route;
use crate::storage;

pub enum Msg {
    Field(String, FieldEvent),
    Clear,
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct ProjectFormProps {
    pub id: String,
}

pub struct ProjectFormPage {
    loaded: Option<(Project, FormSession)>,
}

impl ProjectFormPage {
    fn load(project_id: &str) -> Self {
        let loaded = match storage::workspace().project_with_template(project_id) {
            Ok((project, template)) => Some((project, FormSession::new(template))),
            Err(e) => {
                warn!("project form: {}", e);
                None
            }
        };
        Self { loaded }
    }
}

impl Component for ProjectFormPage {
    type Message = Msg;
    type Properties = ProjectFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::load(&ctx.props().id)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            *self = Self::load(&ctx.props().id);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some((project, session)) = self.loaded.as_mut() else {
            return false;
        };
        match msg {
            Msg::Field(field_id, event) => session.handle(&field_id, event),
            Msg::Clear => {
                session.reset();
                true
            }
            Msg::Submit => {
                match storage::workspace().submit(&project.id, &session.values, now()) {
                    Ok(submission) => {
                        session.submitted(&submission.id);
                        toast_success("Form submitted successfully");
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push(&Route::ProjectDetail {
                                id: project.id.clone(),
                            });
                        }
                    }
                    Err(e) => toast_error(&e),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some((project, session)) = &self.loaded else {
            return html! {
                <div>
                    { page_header("Form", "", Some(Route::Projects), html! {}) }
                    { missing_card("Project not found or loading...") }
                </div>
            };
        };
        let link = ctx.link();

        html! {
            <div>
                {
                    page_header(
                        &project.name,
                        &session.template.name,
                        Some(Route::ProjectDetail { id: project.id.clone() }),
                        html! {},
                    )
                }
                <div class="card">
                    {
                        for session.template.fields.iter().map(|field| {
                            let field_id = field.id.clone();
                            html! {
                                <div class="form-row" key={format!("{}-{}", session.generation, field.id)}>
                                    <label for={field.id.clone()}>
                                        {field.label.clone()}
                                        { if field.required { html! { <span class="required-mark">{"*"}</span> } } else { html! {} } }
                                    </label>
                                    <FieldControl
                                        field={field.clone()}
                                        value={session.values.get(&field.id).cloned()}
                                        on_event={link.callback(move |event: FieldEvent| Msg::Field(field_id.clone(), event))}
                                    />
                                </div>
                            }
                        })
                    }
                    <div class="card-footer">
                        { icon_button("clear", "Clear", link.callback(|_| Msg::Clear), true) }
                        { icon_button("send", "Submit", link.callback(|_| Msg::Submit), false) }
                    </div>
                </div>
            </div>
        }
    }
}
