use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named use of a template, the unit submissions are collected against.
///
/// `template_id` is not checked against the stored templates; a dangling
/// reference shows up as an unknown template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub template_id: String,
    pub created_at: DateTime<Utc>,
}
