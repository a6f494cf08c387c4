use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::job::Job;
use crate::models::user::UserId;

/// One submitted application. Holds the exact resume text that was sent, so
/// later profile edits never change the historical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedJob {
    pub user_id: String,
    pub job_id: String,
    pub title: String,
    pub company: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub resume_text: String,
}

impl AppliedJob {
    /// Snapshots the job's title and company at submission time.
    pub fn new(user: &UserId, job: &Job, resume_text: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user.to_string(),
            job_id: job.job_id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            created_at,
            resume_text: resume_text.to_string(),
        }
    }

    /// Deterministic storage key for a (user, job) pair. Each part is escaped
    /// so the single `_` separator is unambiguous.
    pub fn document_key(user: &UserId, job_id: &str) -> String {
        format!("{}_{}", escape_key_part(user.as_str()), escape_key_part(job_id))
    }

    pub fn belongs_to(&self, user: &UserId, job_id: &str) -> bool {
        self.user_id == user.as_str() && self.job_id == job_id
    }
}

fn escape_key_part(part: &str) -> String {
    part.replace('%', "%25").replace('_', "%5F")
}
