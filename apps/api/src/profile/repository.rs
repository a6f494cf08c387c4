use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::models::{UserId, UserProfile};
use crate::profile::completeness::is_complete;
use crate::store::{self, DocumentStore, StoreError};

pub const PROFILES_COLLECTION: &str = "profiles";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),
}

/// One profile document per user, keyed by user id.
#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn DocumentStore>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// `Ok(None)` when the user has never saved a profile.
    pub async fn get(&self, user: &UserId) -> Result<Option<UserProfile>, ProfileError> {
        let profile = store::get_as::<UserProfile>(
            self.store.as_ref(),
            PROFILES_COLLECTION,
            user.as_str(),
        )
        .await
        .map_err(|e| {
            error!("Error fetching profile for user {user}: {e}");
            e
        })?;

        match &profile {
            Some(_) => debug!("Fetched profile for user {user}"),
            None => debug!("No profile found for user {user}"),
        }
        Ok(profile)
    }

    /// Replaces the stored profile wholesale. The completeness flag is
    /// recomputed here, whatever the caller sent.
    pub async fn save(
        &self,
        user: &UserId,
        mut profile: UserProfile,
    ) -> Result<UserProfile, ProfileError> {
        profile.is_complete = is_complete(&profile);

        store::set_as(
            self.store.as_ref(),
            PROFILES_COLLECTION,
            user.as_str(),
            &profile,
        )
        .await
        .map_err(|e| {
            error!("Error saving profile for user {user}: {e}");
            e
        })?;

        info!(
            "Saved profile for user {user} (complete: {})",
            profile.is_complete
        );
        Ok(profile)
    }
}
