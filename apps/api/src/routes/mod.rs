pub mod health;
pub mod identity;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::generation::handlers as generation;
use crate::jobs::handlers as jobs;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).put(profile::handle_put_profile),
        )
        .route(
            "/api/v1/profile/completeness",
            get(profile::handle_profile_completeness),
        )
        // Job catalog
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/matches", get(jobs::handle_matching_jobs))
        .route("/api/v1/jobs/:job_id", get(jobs::handle_get_job))
        // Resume generation
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications).post(applications::handle_apply),
        )
        .route(
            "/api/v1/applications/:job_id",
            get(applications::handle_get_application),
        )
        .route(
            "/api/v1/applications/:job_id/status",
            get(applications::handle_application_status),
        )
        .with_state(state)
}
