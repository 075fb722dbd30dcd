//! Input control for one template field.
//!
//! `FieldControl` renders whatever `common::form::control_for` picks for the
//! field and reports interactions as `FieldEvent`s. It holds no state of its
//! own: the owning page keeps the `FormValues` and passes the current value
//! back down, and `FormSession` applies the events to them.

mod session;

pub use session::FormSession;

use common::form::{control_for, Control, FieldInput};
use common::model::{Field, FieldValue, FileRef};
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::helpers::{file_ref, first_file};

/// What a control reports to its page.
#[derive(Clone)]
pub enum FieldEvent {
    Changed(FieldInput),
    /// A file was picked; the handle is kept for preview next to its metadata.
    Picked(FileRef, File),
}

#[derive(Properties, PartialEq)]
pub struct FieldControlProps {
    pub field: Field,
    #[prop_or_default]
    pub value: Option<FieldValue>,
    pub on_event: Callback<FieldEvent>,
}

pub struct FieldControl;

impl Component for FieldControl {
    type Message = ();
    type Properties = FieldControlProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FieldControl
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let field = &props.field;
        let text = props
            .value
            .as_ref()
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
            .to_string();

        match control_for(field) {
            Control::SingleLine { input_type } => html! {
                <input
                    class="input"
                    id={field.id.clone()}
                    type={input_type}
                    value={text}
                    required={field.required}
                    oninput={text_input(&props.on_event)}
                />
            },
            Control::DatePicker => html! {
                <input
                    class="input"
                    id={field.id.clone()}
                    type="date"
                    value={text}
                    required={field.required}
                    oninput={text_input(&props.on_event)}
                />
            },
            Control::MultiLine { rows } => {
                let on_event = props.on_event.clone();
                html! {
                    <textarea
                        class="input"
                        id={field.id.clone()}
                        rows={rows.to_string()}
                        value={text}
                        required={field.required}
                        oninput={Callback::from(move |e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                            on_event.emit(FieldEvent::Changed(FieldInput::Text(value)));
                        })}
                    />
                }
            }
            Control::Dropdown {
                options,
                placeholder,
            } => {
                let on_event = props.on_event.clone();
                html! {
                    <select
                        class="input"
                        id={field.id.clone()}
                        onchange={Callback::from(move |e: Event| {
                            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                            on_event.emit(FieldEvent::Changed(FieldInput::Text(value)));
                        })}
                    >
                        <option value="" disabled=true selected={text.is_empty()}>{placeholder}</option>
                        {
                            for options.iter().map(|option| html! {
                                <option value={option.clone()} selected={*option == text}>
                                    {option.clone()}
                                </option>
                            })
                        }
                    </select>
                }
            }
            Control::CheckboxGroup { options } => html! {
                <div>
                    {
                        for options.iter().map(|option| {
                            let checked = props
                                .value
                                .as_ref()
                                .and_then(FieldValue::as_choices)
                                .is_some_and(|choices| choices.contains(option));
                            let on_event = props.on_event.clone();
                            let option_value = option.clone();
                            let input_id = format!("{}-{}", field.id, option);
                            html! {
                                <div class="choice">
                                    <input
                                        type="checkbox"
                                        id={input_id.clone()}
                                        checked={checked}
                                        onchange={Callback::from(move |e: Event| {
                                            let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
                                            on_event.emit(FieldEvent::Changed(FieldInput::Toggle {
                                                option: option_value.clone(),
                                                checked,
                                            }));
                                        })}
                                    />
                                    <label for={input_id}>{option.clone()}</label>
                                </div>
                            }
                        })
                    }
                </div>
            },
            Control::RadioGroup { options } => html! {
                <div>
                    {
                        for options.iter().map(|option| {
                            let on_event = props.on_event.clone();
                            let option_value = option.clone();
                            let input_id = format!("{}-{}", field.id, option);
                            html! {
                                <div class="choice">
                                    <input
                                        type="radio"
                                        id={input_id.clone()}
                                        name={field.id.clone()}
                                        value={option.clone()}
                                        checked={*option == text}
                                        onchange={Callback::from(move |_: Event| {
                                            on_event.emit(FieldEvent::Changed(FieldInput::Text(option_value.clone())));
                                        })}
                                    />
                                    <label for={input_id}>{option.clone()}</label>
                                </div>
                            }
                        })
                    }
                </div>
            },
            Control::FilePicker => {
                let on_event = props.on_event.clone();
                html! {
                    <input
                        class="input"
                        id={field.id.clone()}
                        type="file"
                        required={field.required}
                        onchange={Callback::from(move |e: Event| {
                            let input = e.target_unchecked_into::<HtmlInputElement>();
                            if let Some(file) = first_file(&input) {
                                on_event.emit(FieldEvent::Picked(file_ref(&file), file));
                            }
                        })}
                    />
                }
            }
        }
    }
}

fn text_input(on_event: &Callback<FieldEvent>) -> Callback<InputEvent> {
    let on_event = on_event.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        on_event.emit(FieldEvent::Changed(FieldInput::Text(value)));
    })
}
