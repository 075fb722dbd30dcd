//! Read-only presentation of stored values.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{Field, FieldKind, FieldValue};

/// How a submitted value is shown on the submission detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Absent or empty.
    NotProvided,
    /// A checkbox field with nothing ticked.
    NoneSelected,
    List(Vec<String>),
    Text(String),
}

pub fn display_value(field: &Field, value: Option<&FieldValue>) -> DisplayValue {
    let Some(value) = value else {
        return DisplayValue::NotProvided;
    };
    if let FieldValue::Text(text) = value {
        if text.is_empty() {
            return DisplayValue::NotProvided;
        }
    }
    match field.kind {
        FieldKind::Checkbox => match value {
            FieldValue::Choices(choices) if !choices.is_empty() => {
                DisplayValue::List(choices.clone())
            }
            _ => DisplayValue::NoneSelected,
        },
        FieldKind::Date => match value {
            FieldValue::Text(text) => DisplayValue::Text(format_date(text)),
            other => DisplayValue::Text(cell_text(other)),
        },
        FieldKind::File => match value {
            FieldValue::File(file) if !file.name.is_empty() => DisplayValue::Text(file.name.clone()),
            FieldValue::File(_) => DisplayValue::NotProvided,
            other => DisplayValue::Text(cell_text(other)),
        },
        FieldKind::Text
        | FieldKind::Number
        | FieldKind::Email
        | FieldKind::Textarea
        | FieldKind::Select
        | FieldKind::Radio => DisplayValue::Text(cell_text(value)),
    }
}

/// One-line rendering for table cells: selections joined with `,`, files by name.
pub fn cell_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Choices(choices) => choices.join(","),
        FieldValue::File(file) => file.name.clone(),
    }
}

/// Formats an ISO `YYYY-MM-DD` date for display, e.g. `Mar 7, 2024`.
/// Anything else is returned unchanged.
pub fn format_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

pub fn format_day(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y %H:%M UTC").to_string()
}
