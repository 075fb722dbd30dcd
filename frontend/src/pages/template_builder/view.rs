use common::model::{Field, FieldKind};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::widgets::{icon_button, page_header};
use crate::routes::Route;

use super::messages::Msg;
use super::state::TemplateBuilderPage;

pub fn view(page: &TemplateBuilderPage, ctx: &Context<TemplateBuilderPage>) -> Html {
    let link = ctx.link();
    html! {
        <div>
            {
                page_header(
                    "Create Template",
                    "Describe the fields of your form",
                    Some(Route::Templates),
                    icon_button("save", "Save Template", link.callback(|_| Msg::Save), false),
                )
            }
            { details_card(page, link) }
            { new_field_card(page, link) }
            { fields_card(page, link) }
        </div>
    }
}

fn details_card(page: &TemplateBuilderPage, link: &Scope<TemplateBuilderPage>) -> Html {
    html! {
        <div class="card">
            <p class="card-title">{"Template Details"}</p>
            <div class="form-row">
                <label for="template-name">{"Name"}<span class="required-mark">{"*"}</span></label>
                <input
                    id="template-name"
                    class="input"
                    placeholder="e.g. Customer Feedback"
                    value={page.draft.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <div class="form-row">
                <label for="template-description">{"Description"}</label>
                <textarea
                    id="template-description"
                    class="input"
                    rows="3"
                    value={page.draft.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            </div>
        </div>
    }
}

fn new_field_card(page: &TemplateBuilderPage, link: &Scope<TemplateBuilderPage>) -> Html {
    let current = &page.draft.current;
    html! {
        <div class="card">
            <p class="card-title">{"Add Field"}</p>
            <div class="form-row">
                <label for="field-label">{"Label"}</label>
                <input
                    id="field-label"
                    class="input"
                    placeholder="e.g. Email"
                    value={current.label.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetFieldLabel(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
            <div class="form-row">
                <label for="field-kind">{"Type"}</label>
                <select
                    id="field-kind"
                    class="input"
                    onchange={link.batch_callback(|e: Event| {
                        let tag = e.target_unchecked_into::<HtmlSelectElement>().value();
                        FieldKind::from_tag(&tag).map(Msg::SetFieldKind)
                    })}
                >
                    {
                        for FieldKind::ALL.iter().map(|kind| html! {
                            <option value={kind.tag()} selected={*kind == current.kind}>
                                {kind.label()}
                            </option>
                        })
                    }
                </select>
            </div>
            <div class="choice">
                <input
                    id="field-required"
                    type="checkbox"
                    checked={current.required}
                    onchange={link.callback(|e: Event| {
                        Msg::SetFieldRequired(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                <label for="field-required">{"Required"}</label>
            </div>
            { if current.kind.uses_options() { options_box(page, link) } else { html! {} } }
            <div class="card-footer">
                { icon_button("add", "Add Field", link.callback(|_| Msg::AddField), true) }
            </div>
        </div>
    }
}

fn options_box(page: &TemplateBuilderPage, link: &Scope<TemplateBuilderPage>) -> Html {
    html! {
        <div class="options-box">
            <label for="field-option">{"Options"}</label>
            <div style="display:flex;gap:8px;margin:8px 0;">
                <input
                    id="field-option"
                    class="input"
                    placeholder="Add an option"
                    value={page.draft.pending_option.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetPendingOption(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        (e.key() == "Enter").then(|| {
                            e.prevent_default();
                            Msg::AddOption
                        })
                    })}
                />
                { icon_button("add", "Add", link.callback(|_| Msg::AddOption), true) }
            </div>
            {
                for page.draft.current.options.iter().enumerate().map(|(index, option)| html! {
                    <div class="list-row">
                        <span>{option.clone()}</span>
                        <button class="btn ghost" onclick={link.callback(move |_| Msg::RemoveOption(index))}>
                            <i class="material-icons">{"close"}</i>
                        </button>
                    </div>
                })
            }
        </div>
    }
}

fn fields_card(page: &TemplateBuilderPage, link: &Scope<TemplateBuilderPage>) -> Html {
    if page.draft.fields.is_empty() {
        return html! {
            <div class="card dashed">
                <p class="muted">{"No fields added yet"}</p>
            </div>
        };
    }
    html! {
        <div class="card">
            <p class="card-title">{format!("Fields ({})", page.draft.fields.len())}</p>
            { for page.draft.fields.iter().map(|field| field_row(field, link)) }
        </div>
    }
}

fn field_row(field: &Field, link: &Scope<TemplateBuilderPage>) -> Html {
    let field_id = field.id.clone();
    let options = field.options();
    html! {
        <div class="list-row">
            <div>
                <strong>{field.label.clone()}</strong>
                { if field.required { html! { <span class="required-mark">{"*"}</span> } } else { html! {} } }
                <p class="muted">
                    { field.kind.label() }
                    { if options.is_empty() { String::new() } else { format!(" · {}", options.join(", ")) } }
                </p>
            </div>
            <button class="btn ghost" onclick={link.callback(move |_| Msg::RemoveField(field_id.clone()))}>
                <i class="material-icons">{"delete"}</i>
            </button>
        </div>
    }
}
