//! Form renderer logic.
//!
//! The browser widget in the frontend is a thin shell around this module:
//!
//! 1. `control_for` decides which control edits a field.
//! 2. The widget turns DOM events into a `FieldInput`.
//! 3. `FormValues::apply` coerces the input into the value shape of the kind.
//! 4. On submit, `validate` checks the required fields.
//!
//! Every step matches on `FieldKind` without a catch-all arm, so adding a kind
//! fails to compile until each step handles it.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{Field, FieldKind, FieldValue, FileRef, Template};

/// Placeholder shown by an empty dropdown.
pub const SELECT_PLACEHOLDER: &str = "Select an option";

/// Rows of the multi-line input.
pub const TEXTAREA_ROWS: u32 = 3;

/// The input control that edits one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control<'a> {
    /// `<input>` with the given `type` attribute.
    SingleLine { input_type: &'static str },
    DatePicker,
    MultiLine { rows: u32 },
    Dropdown {
        options: &'a [String],
        placeholder: &'static str,
    },
    CheckboxGroup { options: &'a [String] },
    RadioGroup { options: &'a [String] },
    FilePicker,
}

pub fn control_for(field: &Field) -> Control<'_> {
    match field.kind {
        FieldKind::Text => Control::SingleLine { input_type: "text" },
        FieldKind::Number => Control::SingleLine {
            input_type: "number",
        },
        FieldKind::Email => Control::SingleLine {
            input_type: "email",
        },
        FieldKind::Date => Control::DatePicker,
        FieldKind::Textarea => Control::MultiLine {
            rows: TEXTAREA_ROWS,
        },
        FieldKind::Select => Control::Dropdown {
            options: field.options(),
            placeholder: SELECT_PLACEHOLDER,
        },
        FieldKind::Checkbox => Control::CheckboxGroup {
            options: field.options(),
        },
        FieldKind::Radio => Control::RadioGroup {
            options: field.options(),
        },
        FieldKind::File => Control::FilePicker,
    }
}

/// A user interaction on a control, before coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// New text, date, or chosen option.
    Text(String),
    /// One checkbox option was checked or unchecked.
    Toggle { option: String, checked: bool },
    /// A file was picked; only the first selected file is reported.
    File(FileRef),
}

/// Adds `option` when checked (once), removes every copy when unchecked.
pub fn toggle_choice(choices: &mut Vec<String>, option: &str, checked: bool) {
    if checked {
        if !choices.iter().any(|choice| choice == option) {
            choices.push(option.to_string());
        }
    } else {
        choices.retain(|choice| choice != option);
    }
}

/// In-progress values of a form, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank values for every field of `template`: an empty selection for
    /// checkbox fields, an empty string for text-like fields, nothing for
    /// file fields.
    pub fn initial_for(template: &Template) -> Self {
        let mut values = Self::new();
        for field in &template.fields {
            let initial = match field.kind {
                FieldKind::Checkbox => Some(FieldValue::Choices(Vec::new())),
                FieldKind::Text
                | FieldKind::Number
                | FieldKind::Email
                | FieldKind::Date
                | FieldKind::Textarea
                | FieldKind::Select
                | FieldKind::Radio => Some(FieldValue::Text(String::new())),
                FieldKind::File => None,
            };
            if let Some(initial) = initial {
                values.0.insert(field.id.clone(), initial);
            }
        }
        values
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.0.get(field_id)
    }

    /// Text bound to a single-value control; empty when unset.
    pub fn text(&self, field_id: &str) -> &str {
        self.get(field_id)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
    }

    pub fn is_checked(&self, field_id: &str, option: &str) -> bool {
        self.get(field_id)
            .and_then(FieldValue::as_choices)
            .is_some_and(|choices| choices.iter().any(|choice| choice == option))
    }

    pub fn insert(&mut self, field_id: impl Into<String>, value: FieldValue) {
        self.0.insert(field_id.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coerces `input` into the value shape of `field` and stores it.
    ///
    /// Returns `false` when the input does not fit the kind (a toggle on a
    /// text field, text on a file field, ...); the values are left untouched.
    pub fn apply(&mut self, field: &Field, input: FieldInput) -> bool {
        match field.kind {
            FieldKind::Text
            | FieldKind::Number
            | FieldKind::Email
            | FieldKind::Date
            | FieldKind::Textarea
            | FieldKind::Select
            | FieldKind::Radio => match input {
                FieldInput::Text(text) => {
                    self.insert(field.id.clone(), FieldValue::Text(text));
                    true
                }
                other => ignore(field, other),
            },
            FieldKind::Checkbox => match input {
                FieldInput::Toggle { option, checked } => {
                    let entry = self
                        .0
                        .entry(field.id.clone())
                        .or_insert_with(|| FieldValue::Choices(Vec::new()));
                    if !matches!(entry, FieldValue::Choices(_)) {
                        *entry = FieldValue::Choices(Vec::new());
                    }
                    if let FieldValue::Choices(choices) = entry {
                        toggle_choice(choices, &option, checked);
                    }
                    true
                }
                other => ignore(field, other),
            },
            FieldKind::File => match input {
                FieldInput::File(file) => {
                    self.insert(field.id.clone(), FieldValue::File(file));
                    true
                }
                other => ignore(field, other),
            },
        }
    }
}

fn ignore(field: &Field, input: FieldInput) -> bool {
    debug!(
        "ignoring {:?} for {} field {}",
        input,
        field.kind.tag(),
        field.id
    );
    false
}

/// Whether a required field of this kind counts as filled.
fn is_filled(kind: FieldKind, value: Option<&FieldValue>) -> bool {
    let Some(value) = value else {
        return false;
    };
    match kind {
        FieldKind::Text
        | FieldKind::Number
        | FieldKind::Email
        | FieldKind::Date
        | FieldKind::Textarea
        | FieldKind::Select
        | FieldKind::Radio
        | FieldKind::File => !value.is_empty(),
        FieldKind::Checkbox => value.as_choices().is_some_and(|c| !c.is_empty()),
    }
}

/// Checks every required field of `template` against `values`.
///
/// The error carries the labels of all violated fields in template order.
pub fn validate(template: &Template, values: &FormValues) -> Result<(), ValidationError> {
    let missing: Vec<String> = template
        .fields
        .iter()
        .filter(|field| field.required && !is_filled(field.kind, values.get(&field.id)))
        .map(|field| field.label.clone())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn field(id: &str, label: &str, kind: FieldKind, required: bool) -> Field {
        Field {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            required,
            options: kind
                .uses_options()
                .then(|| vec!["a".to_string(), "b".to_string(), "c".to_string()]),
        }
    }

    fn template(fields: Vec<Field>) -> Template {
        Template {
            id: "t".to_string(),
            name: "Survey".to_string(),
            description: String::new(),
            fields,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn control_per_kind() {
        assert_eq!(
            control_for(&field("1", "E", FieldKind::Email, false)),
            Control::SingleLine {
                input_type: "email"
            }
        );
        assert_eq!(
            control_for(&field("1", "D", FieldKind::Date, false)),
            Control::DatePicker
        );
        assert_eq!(
            control_for(&field("1", "T", FieldKind::Textarea, false)),
            Control::MultiLine { rows: 3 }
        );
        assert_eq!(
            control_for(&field("1", "F", FieldKind::File, false)),
            Control::FilePicker
        );

        let select = field("1", "S", FieldKind::Select, false);
        match control_for(&select) {
            Control::Dropdown {
                options,
                placeholder,
            } => {
                assert_eq!(options.len(), 3);
                assert_eq!(placeholder, "Select an option");
            }
            other => panic!("unexpected control {other:?}"),
        }
    }

    #[test]
    fn initial_values_follow_kind() {
        let t = template(vec![
            field("name", "Name", FieldKind::Text, false),
            field("tags", "Tags", FieldKind::Checkbox, false),
            field("cv", "CV", FieldKind::File, false),
        ]);
        let values = FormValues::initial_for(&t);
        assert_eq!(values.get("name"), Some(&FieldValue::Text(String::new())));
        assert_eq!(values.get("tags"), Some(&FieldValue::Choices(Vec::new())));
        assert_eq!(values.get("cv"), None);
    }

    #[test]
    fn text_input_is_stored_verbatim() {
        let f = field("email", "Email", FieldKind::Email, true);
        let mut values = FormValues::new();
        assert!(values.apply(&f, FieldInput::Text("  a@b.com ".into())));
        assert_eq!(values.text("email"), "  a@b.com ");
    }

    #[test]
    fn checkbox_toggles_add_and_remove() {
        let f = field("tags", "Tags", FieldKind::Checkbox, false);
        let mut values = FormValues::new();
        for option in ["a", "c"] {
            values.apply(
                &f,
                FieldInput::Toggle {
                    option: option.into(),
                    checked: true,
                },
            );
        }
        assert!(values.is_checked("tags", "a"));
        assert!(!values.is_checked("tags", "b"));

        values.apply(
            &f,
            FieldInput::Toggle {
                option: "a".into(),
                checked: false,
            },
        );
        assert_eq!(
            values.get("tags"),
            Some(&FieldValue::Choices(vec!["c".to_string()]))
        );
    }

    #[test]
    fn mismatched_input_is_ignored() {
        let text = field("name", "Name", FieldKind::Text, false);
        let file = field("cv", "CV", FieldKind::File, false);
        let mut values = FormValues::new();

        assert!(!values.apply(
            &text,
            FieldInput::Toggle {
                option: "a".into(),
                checked: true
            }
        ));
        assert!(!values.apply(&file, FieldInput::Text("cv.pdf".into())));
        assert!(values.is_empty());
    }

    #[test]
    fn file_input_replaces_previous_file() {
        let f = field("cv", "CV", FieldKind::File, true);
        let mut values = FormValues::new();
        values.apply(&f, FieldInput::File(FileRef::new("old.pdf", 1, "")));
        values.apply(&f, FieldInput::File(FileRef::new("new.pdf", 2, "")));
        assert_eq!(
            values.get("cv").and_then(FieldValue::as_file).map(|f| f.name.as_str()),
            Some("new.pdf")
        );
    }

    #[test]
    fn validate_reports_all_missing_labels_in_order() {
        let t = template(vec![
            field("email", "Email", FieldKind::Email, true),
            field("nick", "Nickname", FieldKind::Text, false),
            field("tags", "Tags", FieldKind::Checkbox, true),
            field("cv", "CV", FieldKind::File, true),
        ]);
        let err = validate(&t, &FormValues::initial_for(&t)).unwrap_err();
        assert_eq!(err.labels(), ["Email", "Tags", "CV"]);
        assert_eq!(
            err.to_string(),
            "Email is required, Tags is required, CV is required"
        );
    }

    #[test]
    fn validate_accepts_filled_form() {
        let t = template(vec![
            field("email", "Email", FieldKind::Email, true),
            field("tags", "Tags", FieldKind::Checkbox, true),
        ]);
        let mut values = FormValues::initial_for(&t);
        values.apply(&t.fields[0], FieldInput::Text("a@b.com".into()));
        values.apply(
            &t.fields[1],
            FieldInput::Toggle {
                option: "b".into(),
                checked: true,
            },
        );
        assert_eq!(validate(&t, &values), Ok(()));
    }

    #[test]
    fn checkbox_with_wrong_shape_is_not_filled() {
        let t = template(vec![field("tags", "Tags", FieldKind::Checkbox, true)]);
        let mut values = FormValues::new();
        values.insert("tags", FieldValue::Text("a".into()));
        assert!(validate(&t, &values).is_err());
    }

    proptest! {
        #[test]
        fn check_then_uncheck_restores_selection(
            start in proptest::collection::btree_set("[a-e]", 0..5),
            option in "[a-g]",
        ) {
            let start: Vec<String> = start.into_iter().collect();
            prop_assume!(!start.contains(&option));

            let mut choices = start.clone();
            toggle_choice(&mut choices, &option, true);
            prop_assert!(choices.contains(&option));
            toggle_choice(&mut choices, &option, false);
            prop_assert_eq!(choices, start);
        }

        #[test]
        fn checking_twice_keeps_one_copy(option in "[a-z]{1,8}") {
            let mut choices = Vec::new();
            toggle_choice(&mut choices, &option, true);
            toggle_choice(&mut choices, &option, true);
            prop_assert_eq!(choices.len(), 1);
        }
    }
}
