use common::display::format_day;
use common::model::Template;
use yew::prelude::*;

use crate::components::widgets::{link_button, page_header};
use crate::routes::Route;
use crate::storage;

pub struct TemplatesPage {
    templates: Vec<Template>,
}

impl Component for TemplatesPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            templates: storage::workspace().templates(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = if self.templates.is_empty() {
            html! {
                <div class="card dashed">
                    <p class="card-title">{"No templates yet"}</p>
                    <p class="muted">{"Templates describe the fields of a form."}</p>
                    <div class="card-footer" style="justify-content:center;">
                        { link_button(Route::CreateTemplate, "add", "Create Template", false) }
                    </div>
                </div>
            }
        } else {
            html! {
                <div class="grid">
                    { for self.templates.iter().map(template_card) }
                </div>
            }
        };

        html! {
            <div>
                {
                    page_header(
                        "Templates",
                        "Reusable form layouts",
                        Some(Route::Home),
                        link_button(Route::CreateTemplate, "add", "Create Template", false),
                    )
                }
                { body }
            </div>
        }
    }
}

fn template_card(template: &Template) -> Html {
    html! {
        <div class="card">
            <p class="card-title">{template.name.clone()}</p>
            <p class="muted">{template.description.clone()}</p>
            <p class="muted">
                {format!("{} field(s) · Created {}", template.fields.len(), format_day(&template.created_at))}
            </p>
        </div>
    }
}
