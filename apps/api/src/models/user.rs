use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised whenever an operation needs a caller identity and none was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("User not authenticated")]
pub struct NotAuthenticated;

/// Identity of the signed-in user, passed explicitly into every
/// identity-scoped repository call. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: impl Into<String>) -> Result<Self, NotAuthenticated> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NotAuthenticated);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Same as [`UserId::new`] for an identity that may be missing entirely.
    pub fn from_optional(raw: Option<&str>) -> Result<Self, NotAuthenticated> {
        raw.map(UserId::new).unwrap_or(Err(NotAuthenticated))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = NotAuthenticated;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UserId::new(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}
