use serde::{Deserialize, Serialize};

// Fixed set of named external resources; keys are never added or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSettings {
    pub linkedin: String,
    pub instagram: String,
    pub member_application: String,
    pub events_calendar: String,
    pub feedback_form: String,
}
