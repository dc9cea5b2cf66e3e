//! Profile - the per-identity record holding the chosen username.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row per identity, keyed by the identity id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Same value as the owning [`Identity::id`](crate::Identity)
    pub id: Uuid,
    /// Null until the first successful claim
    pub username: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn new(id: Uuid, username: Option<String>, updated_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            username,
            updated_at,
        }
    }

    /// Stored username, treating an empty string the same as none
    pub fn handle(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }
}
