use common::display::cell_text;
use common::model::{FormSubmission, Template};
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::attachments;
use crate::components::field_control::{FieldControl, FieldEvent, FormSession};
use crate::components::top_sheet::TopSheet;
use crate::components::widgets::{icon_button, link_button, missing_card, page_header};
use crate::routes::Route;

use super::messages::Msg;
use super::state::ProjectDetailPage;

pub fn view(page: &ProjectDetailPage, ctx: &Context<ProjectDetailPage>) -> Html {
    let (Some(project), Some(session)) = (&page.project, &page.session) else {
        return html! {
            <div>
                { page_header("Project", "", Some(Route::Projects), html! {}) }
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
                    &project.description,
                    Some(Route::Projects),
                    link_button(Route::ProjectForm { id: project.id.clone() }, "note_add", "Open Form", true),
                )
            }
            <div class="card">
                <p class="card-title">{format!("Submissions ({})", page.submissions.len())}</p>
                <p class="muted">{format!("Template: {}", session.template.name)}</p>
                <div class="table-wrap">
                    <table class="data">
                        <thead>
                            <tr>
                                { for session.template.fields.iter().map(|field| html! { <th>{field.label.clone()}</th> }) }
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for page.submissions.iter().map(|s| submission_row(&project.id, &session.template, s, link)) }
                            { entry_row(session, link) }
                        </tbody>
                    </table>
                </div>
            </div>
            { preview_sheet(page, link) }
        </div>
    }
}

fn submission_row(
    project_id: &str,
    template: &Template,
    submission: &FormSubmission,
    link: &Scope<ProjectDetailPage>,
) -> Html {
    let kept = attachments::fields_with_files(&submission.id);
    html! {
        <tr key={submission.id.clone()}>
            {
                for template.fields.iter().map(|field| {
                    let text = submission.values.get(&field.id).map(cell_text).unwrap_or_default();
                    html! { <td>{text}</td> }
                })
            }
            <td>
                <Link<Route>
                    to={Route::Submission {
                        project_id: project_id.to_string(),
                        submission_id: submission.id.clone(),
                    }}
                    classes="btn outline icon-btn"
                >
                    <i class="material-icons">{"visibility"}</i>
                    <span>{"View"}</span>
                </Link<Route>>
                {
                    for kept.into_iter().map(|field_id| {
                        let label = template
                            .field(&field_id)
                            .map(|f| format!("Preview {}", f.label))
                            .unwrap_or_else(|| "Preview".to_string());
                        let submission_id = submission.id.clone();
                        icon_button(
                            "attach_file",
                            &label,
                            link.callback(move |_| Msg::OpenPreview {
                                submission_id: submission_id.clone(),
                                field_id: field_id.clone(),
                            }),
                            true,
                        )
                    })
                }
            </td>
        </tr>
    }
}

fn entry_row(session: &FormSession, link: &Scope<ProjectDetailPage>) -> Html {
    html! {
        <tr>
            {
                for session.template.fields.iter().map(|field| {
                    let field_id = field.id.clone();
                    html! {
                        <td key={format!("{}-{}", session.generation, field.id)}>
                            <FieldControl
                                field={field.clone()}
                                value={session.values.get(&field.id).cloned()}
                                on_event={link.callback(move |event: FieldEvent| Msg::Field(field_id.clone(), event))}
                            />
                        </td>
                    }
                })
            }
            <td>
                { icon_button("send", "Submit", link.callback(|_| Msg::Submit), false) }
            </td>
        </tr>
    }
}

fn preview_sheet(page: &ProjectDetailPage, link: &Scope<ProjectDetailPage>) -> Html {
    let body = match &page.preview {
        Some(preview) if preview.is_image => html! {
            <>
                <p class="card-title">{preview.name.clone()}</p>
                <img src={preview.url.clone()} alt={preview.name.clone()} />
            </>
        },
        Some(preview) => html! {
            <>
                <p class="card-title">{preview.name.clone()}</p>
                <a class="btn" href={preview.url.clone()} target="_blank" download={preview.name.clone()}>
                    {"Open file"}
                </a>
            </>
        },
        None => html! {},
    };
    html! {
        <TopSheet open={page.preview.is_some()} on_close={link.callback(|_| Msg::ClosePreview)}>
            { body }
        </TopSheet>
    }
}
