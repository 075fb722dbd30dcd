use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::field::Field;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "known_fields")]
    pub fields: Vec<Field>,
    pub created_at: DateTime<Utc>,
}

impl Template {
    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id == field_id)
    }
}

/// Decodes the field list, skipping fields whose `type` is not a known kind
/// so the rest of the template still loads.
fn known_fields<'de, D>(deserializer: D) -> Result<Vec<Field>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Field>(value) {
            Ok(field) => Some(field),
            Err(e) => {
                warn!("skipping unreadable template field: {}", e);
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldKind;

    #[test]
    fn unknown_field_types_are_skipped() {
        let json = r#"{
            "id": "t1",
            "name": "Mixed",
            "fields": [
                {"id": "a", "label": "Name", "type": "text", "required": true},
                {"id": "b", "label": "Rating", "type": "slider", "required": false},
                {"id": "c", "label": "Notes", "type": "text area", "required": false}
            ],
            "createdAt": "2024-02-01T10:00:00Z"
        }"#;
        let template: Template = serde_json::from_str(json).unwrap();

        let kinds: Vec<FieldKind> = template.fields.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, [FieldKind::Text, FieldKind::Textarea]);
        assert!(template.field("b").is_none());
        assert_eq!(template.description, "");
    }
}
