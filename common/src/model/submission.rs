use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::FormValues;

/// One filled-in form. Written once and never changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub id: String,
    pub project_id: String,
    pub template_id: String,
    /// Submitted values keyed by field id.
    pub values: FormValues,
    pub submitted_at: DateTime<Utc>,
}
