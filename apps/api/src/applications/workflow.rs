//! Auto-apply: generate a resume targeted at one job, then record it.

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::applications::ledger::{ApplicationLedger, LedgerError};
use crate::generation::composer::ResumeComposer;
use crate::llm_client::GenerationError;
use crate::models::{AppliedJob, Job, UserId, UserProfile};

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Nothing is written unless generation produced a resume; a cancelled or
/// failed generation leaves the ledger untouched.
pub async fn auto_apply(
    ledger: &ApplicationLedger,
    composer: &ResumeComposer,
    user: &UserId,
    profile: &UserProfile,
    job: &Job,
    token: &CancellationToken,
) -> Result<AppliedJob, ApplyError> {
    // Checked first so a repeat apply does not pay for a generation call.
    if ledger.has_applied(user, &job.job_id).await? {
        debug!("User {user} already applied to job {}; skipping generation", job.job_id);
        return Err(LedgerError::AlreadyApplied {
            job_id: job.job_id.clone(),
        }
        .into());
    }

    let resume_text = composer
        .compose_cancellable(profile, Some(&job.description), token)
        .await?;

    let applied = ledger.record_application(user, job, &resume_text).await?;
    info!("Auto-applied user {user} to job {}", job.job_id);
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::llm_client::fake::{ScriptedGenerator, StalledGenerator};
    use crate::store::InMemoryDocumentStore;

    fn job() -> Job {
        Job {
            job_id: "j1".to_string(),
            title: "Android Developer".to_string(),
            company: "TechCorp".to_string(),
            description: "Develop Android applications using Kotlin".to_string(),
            skills_required: vec!["Kotlin".to_string()],
            ..Default::default()
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "Asha".to_string(),
            skills: vec!["Kotlin".to_string()],
            ..Default::default()
        }
    }

    fn ledger() -> ApplicationLedger {
        ApplicationLedger::new(Arc::new(InMemoryDocumentStore::new()))
    }

    #[tokio::test]
    async fn test_auto_apply_records_targeted_resume() {
        let ledger = ledger();
        let generator = Arc::new(ScriptedGenerator::replying("TAILORED RESUME"));
        let composer = ResumeComposer::new(generator.clone());
        let user = UserId::new("u1").unwrap();

        let applied = auto_apply(
            &ledger,
            &composer,
            &user,
            &profile(),
            &job(),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(applied.resume_text, "TAILORED RESUME");
        assert!(generator.prompts()[0].contains("Develop Android applications using Kotlin"));
        assert!(ledger.has_applied(&user, "j1").await.unwrap());
    }

    #[tokio::test]
    async fn test_auto_apply_twice_is_rejected_without_generating() {
        let ledger = ledger();
        let generator = Arc::new(ScriptedGenerator::replying("RESUME"));
        let composer = ResumeComposer::new(generator.clone());
        let user = UserId::new("u1").unwrap();
        let token = CancellationToken::new();

        auto_apply(&ledger, &composer, &user, &profile(), &job(), &token)
            .await
            .unwrap();
        let err = auto_apply(&ledger, &composer, &user, &profile(), &job(), &token)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplyError::Ledger(LedgerError::AlreadyApplied { .. })
        ));
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_auto_apply_writes_nothing() {
        let ledger = ledger();
        let composer = ResumeComposer::new(Arc::new(StalledGenerator));
        let user = UserId::new("u1").unwrap();
        let token = CancellationToken::new();
        token.cancel();

        let err = auto_apply(&ledger, &composer, &user, &profile(), &job(), &token)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplyError::Generation(GenerationError::Cancelled)));
        assert!(!ledger.has_applied(&user, "j1").await.unwrap());
    }

    #[tokio::test]
    async fn test_failed_generation_writes_nothing() {
        let ledger = ledger();
        let composer = ResumeComposer::new(Arc::new(ScriptedGenerator::failing(
            GenerationError::EmptyResponse,
        )));
        let user = UserId::new("u1").unwrap();

        let err = auto_apply(
            &ledger,
            &composer,
            &user,
            &profile(),
            &job(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApplyError::Generation(GenerationError::EmptyResponse)));
        assert!(ledger.list_applications(&user).await.unwrap().is_empty());
    }
}
