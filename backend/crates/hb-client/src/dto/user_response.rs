use hb_core::Identity;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// The subset of the auth user object the account view uses
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserResponse> for Identity {
    fn from(user: UserResponse) -> Self {
        // The auth API reports "" rather than null for phone-only users
        let email = user.email.filter(|e| !e.is_empty());
        Identity::new(user.id, email, user.created_at)
    }
}
