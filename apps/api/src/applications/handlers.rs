use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::applications::workflow::auto_apply;
use crate::errors::AppError;
use crate::models::{AppliedJob, Job};
use crate::routes::identity::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub job_id: String,
    /// Resume to submit as-is. When omitted, one is generated for the job.
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatus {
    pub job_id: String,
    pub applied: bool,
}

/// POST /api/v1/applications
pub async fn handle_apply(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<AppliedJob>), AppError> {
    if request.job_id.trim().is_empty() {
        return Err(AppError::Validation("job_id cannot be empty".to_string()));
    }
    let job = find_job(&state, &request.job_id).await?;

    let applied = match request.resume_text {
        Some(text) if text.trim().is_empty() => {
            return Err(AppError::Validation("resume_text cannot be empty".to_string()));
        }
        Some(text) => state.ledger.record_application(&user, &job, &text).await?,
        None => {
            let profile = state.profiles.get(&user).await?.ok_or_else(|| {
                AppError::NotFound(format!("No profile for user {user}; save one to auto-apply"))
            })?;
            auto_apply(
                &state.ledger,
                &state.composer,
                &user,
                &profile,
                &job,
                &state.shutdown,
            )
            .await?
        }
    };

    Ok((StatusCode::CREATED, Json(applied)))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<AppliedJob>>, AppError> {
    Ok(Json(state.ledger.list_applications(&user).await?))
}

/// GET /api/v1/applications/:job_id
pub async fn handle_get_application(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(job_id): Path<String>,
) -> Result<Json<AppliedJob>, AppError> {
    let applied = state
        .ledger
        .get_application(&user, &job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No application for job {job_id}")))?;
    Ok(Json(applied))
}

/// GET /api/v1/applications/:job_id/status
pub async fn handle_application_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(job_id): Path<String>,
) -> Result<Json<ApplicationStatus>, AppError> {
    let applied = state.ledger.has_applied(&user, &job_id).await?;
    Ok(Json(ApplicationStatus { job_id, applied }))
}

async fn find_job(state: &AppState, job_id: &str) -> Result<Job, AppError> {
    state
        .catalog
        .get(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}
