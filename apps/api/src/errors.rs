use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::applications::ledger::LedgerError;
use crate::applications::workflow::ApplyError;
use crate::jobs::catalog::CatalogError;
use crate::llm_client::GenerationError;
use crate::models::NotAuthenticated;
use crate::profile::repository::ProfileError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("User not authenticated")]
    NotAuthenticated,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl From<NotAuthenticated> for AppError {
    fn from(_: NotAuthenticated) -> Self {
        AppError::NotAuthenticated
    }
}

impl From<ProfileError> for AppError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::StorageUnavailable(e) => AppError::Storage(e),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::StorageUnavailable(e) => AppError::Storage(e),
            CatalogError::AlreadyPublished(id) => {
                AppError::Conflict(format!("Job {id} is already published"))
            }
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::StorageUnavailable(e) => AppError::Storage(e),
            LedgerError::AlreadyApplied { job_id } => {
                AppError::Conflict(format!("Already applied to job {job_id}"))
            }
        }
    }
}

impl From<ApplyError> for AppError {
    fn from(e: ApplyError) -> Self {
        match e {
            ApplyError::Ledger(e) => e.into(),
            ApplyError::Generation(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "NOT_AUTHENTICATED",
                "User not authenticated".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORAGE_UNAVAILABLE",
                    "Storage is temporarily unavailable".to_string(),
                )
            }
            // The caller went away or the server is stopping; not a failure.
            AppError::Generation(GenerationError::Cancelled) => {
                tracing::debug!("Request cancelled during generation");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CANCELLED",
                    "Request cancelled".to_string(),
                )
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_FAILED",
                    "Resume generation failed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_application_maps_to_conflict() {
        let err: AppError = LedgerError::AlreadyApplied {
            job_id: "j1".to_string(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_cancelled_generation_is_service_unavailable() {
        let err: AppError = ApplyError::Generation(GenerationError::Cancelled).into();
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_backend_failure_is_bad_gateway() {
        let err: AppError = GenerationError::EmptyResponse.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_missing_identity_is_unauthorized() {
        let err: AppError = NotAuthenticated.into();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_store_fault_is_service_unavailable() {
        let err: AppError = ProfileError::StorageUnavailable(StoreError::Database(
            sqlx::Error::PoolTimedOut,
        ))
        .into();
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
