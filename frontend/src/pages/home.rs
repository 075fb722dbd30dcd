use common::workspace::Overview;
use yew::prelude::*;

use crate::components::widgets::{link_button, page_header};
use crate::routes::Route;
use crate::storage;

pub struct HomePage {
    overview: Overview,
}

impl Component for HomePage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            overview: storage::workspace().overview(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = if self.overview.has_content() {
            html! {
                <div class="grid">
                    <div class="card">
                        <p class="card-title">{"Templates"}</p>
                        <p class="muted">{format!("{} template(s) ready to reuse", self.overview.templates)}</p>
                        <div class="card-footer">
                            { link_button(Route::Templates, "description", "Manage Templates", true) }
                        </div>
                    </div>
                    <div class="card">
                        <p class="card-title">{"Projects"}</p>
                        <p class="muted">{format!("{} project(s) collecting submissions", self.overview.projects)}</p>
                        <div class="card-footer">
                            { link_button(Route::Projects, "folder", "Manage Projects", true) }
                        </div>
                    </div>
                </div>
            }
        } else {
            html! {
                <div class="card dashed">
                    <p class="card-title">{"Get Started"}</p>
                    <p class="muted">{"Create a template to describe your form, then a project to collect submissions."}</p>
                    <div class="card-footer" style="justify-content:center;">
                        { link_button(Route::CreateTemplate, "add", "Create Template", false) }
                    </div>
                </div>
            }
        };

        html! {
            <div>
                { page_header("Dashboard", "Build form templates and collect submissions", None, html! {}) }
                { body }
            </div>
        }
    }
}
