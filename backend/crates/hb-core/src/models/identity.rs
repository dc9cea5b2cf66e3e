//! Identity - the authenticated actor, issued by the auth collaborator.

use crate::FALLBACK_HANDLE;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only view of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    /// Contact address; only used to suggest a first username
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(id: Uuid, email: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            created_at,
        }
    }

    /// Username suggested when no profile handle exists yet.
    ///
    /// The part of the email before the first `@`, or [`FALLBACK_HANDLE`]
    /// when that part is empty or there is no email at all.
    pub fn default_handle(&self) -> String {
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or(FALLBACK_HANDLE)
            .to_string()
    }
}
