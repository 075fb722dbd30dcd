use serde::{Deserialize, Serialize};

/// The closed set of input kinds a template field can have.
///
/// Serialized as the lowercase tag stored under `"type"`. Older data wrote
/// the multi-line kind as `"text area"`, which is still accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Date,
    #[serde(alias = "text area")]
    Textarea,
    Select,
    Checkbox,
    Radio,
    File,
}

impl FieldKind {
    /// Every kind, in the order offered by the template builder.
    pub const ALL: [FieldKind; 9] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Email,
        FieldKind::Date,
        FieldKind::Textarea,
        FieldKind::Select,
        FieldKind::Checkbox,
        FieldKind::Radio,
        FieldKind::File,
    ];

    /// Storage tag, also used as the `<option>` value in the builder.
    pub fn tag(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Date => "date",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::File => "file",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text area" => Some(FieldKind::Textarea),
            _ => FieldKind::ALL.into_iter().find(|kind| kind.tag() == tag),
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Number => "Number",
            FieldKind::Email => "Email",
            FieldKind::Date => "Date",
            FieldKind::Textarea => "Text Area",
            FieldKind::Select => "Select",
            FieldKind::Checkbox => "Checkbox",
            FieldKind::Radio => "Radio",
            FieldKind::File => "File",
        }
    }

    /// Whether the kind picks from the field's `options`.
    pub fn uses_options(self) -> bool {
        matches!(
            self,
            FieldKind::Select | FieldKind::Checkbox | FieldKind::Radio
        )
    }
}

/// One typed input descriptor within a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Field {
    /// Options offered by the control; empty for kinds that do not use them.
    pub fn options(&self) -> &[String] {
        if self.kind.uses_options() {
            self.options.as_deref().unwrap_or(&[])
        } else {
            &[]
        }
    }
}
