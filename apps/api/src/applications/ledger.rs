use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::models::{AppliedJob, Job, UserId};
use crate::store::{self, DocumentStore, Query, StoreError};

pub const APPLICATIONS_COLLECTION: &str = "applications";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Application ledger unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    #[error("Already applied to job {job_id}")]
    AlreadyApplied { job_id: String },
}

/// Per-user record of submitted applications.
///
/// At most one record exists per (user, job): the first submission wins and
/// later ones are rejected without touching it.
#[derive(Clone)]
pub struct ApplicationLedger {
    store: Arc<dyn DocumentStore>,
}

impl ApplicationLedger {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn record_application(
        &self,
        user: &UserId,
        job: &Job,
        resume_text: &str,
    ) -> Result<AppliedJob, LedgerError> {
        self.record_at(user, job, resume_text, Utc::now()).await
    }

    pub(crate) async fn record_at(
        &self,
        user: &UserId,
        job: &Job,
        resume_text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<AppliedJob, LedgerError> {
        let applied = AppliedJob::new(user, job, resume_text, created_at);
        let key = AppliedJob::document_key(user, &job.job_id);

        let created = store::create_as(
            self.store.as_ref(),
            APPLICATIONS_COLLECTION,
            &key,
            &applied,
        )
        .await
        .map_err(|e| {
            error!("Error saving application for user {user}, job {}: {e}", job.job_id);
            e
        })?;

        if !created {
            warn!("User {user} already applied to job {}", job.job_id);
            return Err(LedgerError::AlreadyApplied {
                job_id: job.job_id.clone(),
            });
        }

        info!("Recorded application for user {user}, job {}", job.job_id);
        Ok(applied)
    }

    /// Newest first.
    pub async fn list_applications(&self, user: &UserId) -> Result<Vec<AppliedJob>, LedgerError> {
        let query = Query::new()
            .where_eq("userId", user.as_str())
            .order_by_desc("timestamp");

        let mut applications: Vec<AppliedJob> =
            store::query_as(self.store.as_ref(), APPLICATIONS_COLLECTION, &query)
                .await
                .map_err(|e| {
                    error!("Error fetching applications for user {user}: {e}");
                    e
                })?;

        // Stores order by the serialized value; the typed timestamp is authoritative.
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        debug!("Fetched {} applications for user {user}", applications.len());
        Ok(applications)
    }

    pub async fn has_applied(&self, user: &UserId, job_id: &str) -> Result<bool, LedgerError> {
        Ok(self.get_application(user, job_id).await?.is_some())
    }

    pub async fn get_application(
        &self,
        user: &UserId,
        job_id: &str,
    ) -> Result<Option<AppliedJob>, LedgerError> {
        let key = AppliedJob::document_key(user, job_id);
        let applied: Option<AppliedJob> =
            store::get_as(self.store.as_ref(), APPLICATIONS_COLLECTION, &key)
                .await
                .map_err(|e| {
                    error!("Error checking application for user {user}, job {job_id}: {e}");
                    e
                })?;

        // A record for another (user, job) pair is never returned.
        Ok(applied.filter(|a| {
            let owned = a.belongs_to(user, job_id);
            if !owned {
                warn!("Ignoring application {key} not owned by user {user} for job {job_id}");
            }
            owned
        }))
    }
}
