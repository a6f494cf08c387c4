use serde::{Deserialize, Serialize};

/// An open job posting. Immutable once published and shared by all users.
///
/// `apply_deadline` is carried as-is; nothing in the service parses it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub skills_required: Vec<String>,
    pub location: String,
    pub apply_deadline: String,
}
