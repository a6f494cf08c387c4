use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::matching::matched_skills;
use crate::models::Job;
use crate::routes::identity::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedJob {
    #[serde(flatten)]
    pub job: Job,
    /// The job's required skills found in the profile, in the job's order.
    pub matched_skills: Vec<String>,
}

/// GET /api/v1/jobs
///
/// Anonymous callers, and users who have not saved a profile, get the whole
/// catalog. A user with a profile gets the jobs matching their skills.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
) -> Result<Json<Vec<Job>>, AppError> {
    let profile = match user {
        Some(CurrentUser(user)) => state.profiles.get(&user).await?,
        None => None,
    };
    Ok(Json(state.catalog.jobs_for(profile.as_ref()).await?))
}

/// GET /api/v1/jobs/matches
pub async fn handle_matching_jobs(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<MatchedJob>>, AppError> {
    let profile = state.profiles.get(&user).await?.ok_or_else(|| {
        AppError::NotFound(format!("No profile for user {user}; save one to see matches"))
    })?;

    let matches = state
        .catalog
        .filtered_for(&profile)
        .await?
        .into_iter()
        .map(|job| MatchedJob {
            matched_skills: matched_skills(&profile, &job),
            job,
        })
        .collect();

    Ok(Json(matches))
}

/// GET /api/v1/jobs/:job_id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let job = state
        .catalog
        .get(&job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(job))
}
