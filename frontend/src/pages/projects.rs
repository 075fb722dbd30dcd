use common::workspace::ProjectSummary;
use yew::prelude::*;

use crate::components::widgets::{link_button, page_header};
use crate::routes::Route;
use crate::storage;

pub struct ProjectsPage {
    summaries: Vec<ProjectSummary>,
}

impl Component for ProjectsPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            summaries: storage::workspace().project_summaries(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = if self.summaries.is_empty() {
            html! {
                <div class="card dashed">
                    <p class="card-title">{"No projects yet"}</p>
                    <p class="muted">{"A project collects submissions for one template."}</p>
                    <div class="card-footer" style="justify-content:center;">
                        { link_button(Route::CreateProject, "add", "Create Project", false) }
                    </div>
                </div>
            }
        } else {
            html! {
                <div class="grid">
                    { for self.summaries.iter().map(project_card) }
                </div>
            }
        };

        html! {
            <div>
                {
                    page_header(
                        "Projects",
                        "Collect submissions against your templates",
                        Some(Route::Home),
                        link_button(Route::CreateProject, "add", "Create Project", false),
                    )
                }
                { body }
            </div>
        }
    }
}

fn project_card(summary: &ProjectSummary) -> Html {
    let id = summary.project.id.clone();
    html! {
        <div class="card">
            <p class="card-title">{summary.project.name.clone()}</p>
            <p class="muted">{summary.project.description.clone()}</p>
            <p class="muted">{format!("Template: {}", summary.template_name)}</p>
            <div class="card-footer">
                { link_button(Route::EditProject { id: id.clone() }, "edit", "Edit", true) }
                { link_button(Route::ProjectForm { id: id.clone() }, "note_add", "Create Form", true) }
                { link_button(Route::ProjectDetail { id }, "visibility", "View", false) }
            </div>
        </div>
    }
}
