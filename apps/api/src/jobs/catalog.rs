use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::jobs::matching::{self, filter_jobs};
use crate::jobs::seed::sample_jobs;
use crate::models::{Job, UserProfile};
use crate::store::{self, DocumentStore, Query, StoreError};

pub const JOBS_COLLECTION: &str = "jobs";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Job catalog unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    #[error("Job {0} is already published")]
    AlreadyPublished(String),
}

/// The global, shared set of open postings. Catalog order is ascending job id.
#[derive(Clone)]
pub struct JobCatalog {
    store: Arc<dyn DocumentStore>,
}

impl JobCatalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Job>, CatalogError> {
        let documents = self
            .store
            .query(JOBS_COLLECTION, &Query::new())
            .await
            .map_err(|e| {
                error!("Error fetching jobs: {e}");
                e
            })?;

        let mut jobs = Vec::with_capacity(documents.len());
        for doc in documents {
            let mut job: Job = serde_json::from_value(doc.body).map_err(StoreError::from)?;
            // The document key is the job's identity.
            job.job_id = doc.key;
            jobs.push(job);
        }

        debug!("Fetched {} jobs", jobs.len());
        Ok(jobs)
    }

    pub async fn get(&self, job_id: &str) -> Result<Option<Job>, CatalogError> {
        let job = store::get_as::<Job>(self.store.as_ref(), JOBS_COLLECTION, job_id).await?;
        Ok(job.map(|mut job| {
            job.job_id = job_id.to_string();
            job
        }))
    }

    /// Jobs matching the profile's skills, in catalog order.
    pub async fn filtered_for(&self, profile: &UserProfile) -> Result<Vec<Job>, CatalogError> {
        let all_jobs = self.list_all().await?;
        let matched = filter_jobs(profile, &all_jobs);
        debug!("{} of {} jobs match profile", matched.len(), all_jobs.len());
        Ok(matched)
    }

    /// The full catalog when there is no profile, the matching jobs otherwise.
    pub async fn jobs_for(&self, profile: Option<&UserProfile>) -> Result<Vec<Job>, CatalogError> {
        let all_jobs = self.list_all().await?;
        Ok(matching::jobs_for(profile, &all_jobs))
    }

    /// Publishes a new posting. Published postings are immutable, so an
    /// existing id is rejected rather than overwritten.
    pub async fn publish(&self, job: &Job) -> Result<(), CatalogError> {
        let created =
            store::create_as(self.store.as_ref(), JOBS_COLLECTION, &job.job_id, job).await?;
        if !created {
            warn!("Refusing to republish job {}", job.job_id);
            return Err(CatalogError::AlreadyPublished(job.job_id.clone()));
        }
        info!("Published job {} ({} at {})", job.job_id, job.title, job.company);
        Ok(())
    }

    /// Publishes the sample postings if the catalog is empty. Returns how many
    /// were added.
    pub async fn seed_samples(&self) -> Result<usize, CatalogError> {
        if !self.list_all().await?.is_empty() {
            info!("Job catalog already populated; skipping sample seed");
            return Ok(0);
        }

        let samples = sample_jobs();
        for job in &samples {
            self.publish(job).await?;
        }
        info!("Seeded {} sample jobs", samples.len());
        Ok(samples.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryDocumentStore;
    use serde_json::json;

    fn catalog() -> (Arc<InMemoryDocumentStore>, JobCatalog) {
        let store = Arc::new(InMemoryDocumentStore::new());
        (store.clone(), JobCatalog::new(store))
    }

    fn job(id: &str, skills: &[&str]) -> Job {
        Job {
            job_id: id.to_string(),
            title: format!("Job {id}"),
            company: "Acme".to_string(),
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_all_takes_id_from_document_key() {
        let (store, catalog) = catalog();
        store
            .set(
                JOBS_COLLECTION,
                "doc-42",
                json!({"title": "Android Developer", "skillsRequired": ["Kotlin"]}),
            )
            .await
            .unwrap();

        let jobs = catalog.list_all().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_id, "doc-42");
        assert_eq!(jobs[0].title, "Android Developer");
    }

    #[tokio::test]
    async fn test_get_missing_job_is_none() {
        let (_, catalog) = catalog();
        assert!(catalog.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_publish_then_get() {
        let (_, catalog) = catalog();
        catalog.publish(&job("j1", &["Rust"])).await.unwrap();
        let fetched = catalog.get("j1").await.unwrap().unwrap();
        assert_eq!(fetched.skills_required, vec!["Rust".to_string()]);
    }

    #[tokio::test]
    async fn test_republish_is_rejected_and_first_kept() {
        let (_, catalog) = catalog();
        catalog.publish(&job("j1", &["Rust"])).await.unwrap();

        let err = catalog.publish(&job("j1", &["Go"])).await.unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyPublished(id) if id == "j1"));

        let fetched = catalog.get("j1").await.unwrap().unwrap();
        assert_eq!(fetched.skills_required, vec!["Rust".to_string()]);
    }

    #[tokio::test]
    async fn test_filtered_for_uses_profile_skills() {
        let (_, catalog) = catalog();
        catalog.publish(&job("j1", &["Kotlin", "Android"])).await.unwrap();
        catalog.publish(&job("j2", &["Java"])).await.unwrap();

        let profile = UserProfile {
            skills: vec!["Kotlin".to_string(), "SQL".to_string()],
            ..Default::default()
        };
        let matched = catalog.filtered_for(&profile).await.unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].job_id, "j1");
    }

    #[tokio::test]
    async fn test_jobs_for_without_profile_is_whole_catalog() {
        let (_, catalog) = catalog();
        catalog.publish(&job("j1", &["Kotlin"])).await.unwrap();
        catalog.publish(&job("j2", &["Java"])).await.unwrap();

        assert_eq!(catalog.jobs_for(None).await.unwrap().len(), 2);
        assert!(catalog
            .jobs_for(Some(&UserProfile::default()))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_seed_samples_only_fills_empty_catalog() {
        let (_, catalog) = catalog();
        assert_eq!(catalog.seed_samples().await.unwrap(), 5);
        assert_eq!(catalog.seed_samples().await.unwrap(), 0);
        assert_eq!(catalog.list_all().await.unwrap().len(), 5);
    }
}
