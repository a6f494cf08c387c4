//! Axum route handlers for resume generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::routes::identity::CurrentUser;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    /// Tailor the resume to this job. Omit for a general resume.
    #[serde(default)]
    pub job_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub resume_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// Generates from the caller's saved profile. Nothing is persisted; the text
/// becomes a record only when submitted with an application.
pub async fn handle_generate(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let profile = state
        .profiles
        .get(&user)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {user}")))?;

    let job = match request.job_id.as_deref() {
        Some(job_id) if job_id.trim().is_empty() => {
            return Err(AppError::Validation("job_id cannot be empty".to_string()));
        }
        Some(job_id) => Some(
            state
                .catalog
                .get(job_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?,
        ),
        None => None,
    };

    let resume_text = state
        .composer
        .compose_cancellable(
            &profile,
            job.as_ref().map(|j| j.description.as_str()),
            &state.shutdown,
        )
        .await?;

    Ok(Json(GenerateResponse {
        resume_text,
        job_id: job.map(|j| j.job_id),
    }))
}
