use common::display::{display_value, format_timestamp, DisplayValue};
use common::model::Field;
use common::workspace::SubmissionDetail;
use log::warn;
use yew::prelude::*;

use crate::components::widgets::{missing_card, page_header};
use crate::routes::Route;
use crate::storage;

#[derive(Properties, PartialEq)]
pub struct SubmissionDetailProps {
    pub project_id: String,
    pub submission_id: String,
}

pub struct SubmissionDetailPage {
    detail: Option<SubmissionDetail>,
}

impl SubmissionDetailPage {
    fn load(props: &SubmissionDetailProps) -> Self {
        let detail = storage::workspace()
            .submission_detail(&props.project_id, &props.submission_id)
            .map_err(|e| warn!("submission detail: {}", e))
            .ok();
        Self { detail }
    }
}

impl Component for SubmissionDetailPage {
    type Message = ();
    type Properties = SubmissionDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::load(ctx.props())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props() != old_props {
            *self = Self::load(ctx.props());
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let back = Route::ProjectDetail {
            id: ctx.props().project_id.clone(),
        };
        let Some(detail) = &self.detail else {
            return html! {
                <div>
                    { page_header("Submission", "", Some(back), html! {}) }
                    { missing_card("Submission not found or loading...") }
                </div>
            };
        };

        html! {
            <div>
                {
                    page_header(
                        "Submission Details",
                        &format!("{} · {}", detail.project.name, detail.template.name),
                        Some(back),
                        html! {},
                    )
                }
                <div class="card">
                    <p class="muted">{format!("Submitted {}", format_timestamp(&detail.submission.submitted_at))}</p>
                    { for detail.template.fields.iter().map(|field| value_row(field, detail)) }
                </div>
            </div>
        }
    }
}

fn value_row(field: &Field, detail: &SubmissionDetail) -> Html {
    let value = match display_value(field, detail.submission.values.get(&field.id)) {
        DisplayValue::NotProvided => html! { <span class="not-provided">{"Not provided"}</span> },
        DisplayValue::NoneSelected => html! { <span class="not-provided">{"None selected"}</span> },
        DisplayValue::List(items) => html! {
            <ul>
                { for items.into_iter().map(|item| html! { <li>{item}</li> }) }
            </ul>
        },
        DisplayValue::Text(text) => html! { <span>{text}</span> },
    };
    html! {
        <div class="form-row">
            <label>{field.label.clone()}</label>
            { value }
        </div>
    }
}
