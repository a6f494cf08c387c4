use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::UserProfile;
use crate::profile::completeness::{completeness_report, CompletenessReport};
use crate::routes::identity::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
    pub completeness: CompletenessReport,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let completeness = completeness_report(&profile);
        Self {
            profile,
            completeness,
        }
    }
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state
        .profiles
        .get(&user)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {user}")))?;
    Ok(Json(profile.into()))
}

/// PUT /api/v1/profile
///
/// Full replace. `isComplete` in the body is ignored and recomputed.
pub async fn handle_put_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(profile): Json<UserProfile>,
) -> Result<Json<ProfileResponse>, AppError> {
    let saved = state.profiles.save(&user, profile).await?;
    Ok(Json(saved.into()))
}

/// GET /api/v1/profile/completeness
///
/// A user without a saved profile is reported as an empty one.
pub async fn handle_profile_completeness(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<CompletenessReport>, AppError> {
    let profile = state.profiles.get(&user).await?.unwrap_or_default();
    Ok(Json(completeness_report(&profile)))
}
