//! Client-side routes and the page each one renders.

use yew::{html, Html};
use yew_router::Routable;

use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::project_detail::ProjectDetailPage;
use crate::pages::project_editor::ProjectEditorPage;
use crate::pages::project_form::ProjectFormPage;
use crate::pages::projects::ProjectsPage;
use crate::pages::submission_detail::SubmissionDetailPage;
use crate::pages::template_builder::TemplateBuilderPage;
use crate::pages::templates::TemplatesPage;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/templates")]
    Templates,
    #[at("/templates/create")]
    CreateTemplate,
    #[at("/projects")]
    Projects,
    #[at("/projects/create")]
    CreateProject,
    #[at("/projects/edit/:id")]
    EditProject { id: String },
    #[at("/projects/:id")]
    ProjectDetail { id: String },
    #[at("/projects/:id/form")]
    ProjectForm { id: String },
    #[at("/projects/:project_id/submission/:submission_id")]
    Submission {
        project_id: String,
        submission_id: String,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Templates => html! { <TemplatesPage /> },
        Route::CreateTemplate => html! { <TemplateBuilderPage /> },
        Route::Projects => html! { <ProjectsPage /> },
        Route::CreateProject => html! { <ProjectEditorPage /> },
        Route::EditProject { id } => html! { <ProjectEditorPage id={Some(id)} /> },
        Route::ProjectDetail { id } => html! { <ProjectDetailPage {id} /> },
        Route::ProjectForm { id } => html! { <ProjectFormPage {id} /> },
        Route::Submission {
            project_id,
            submission_id,
        } => html! { <SubmissionDetailPage {project_id} {submission_id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
