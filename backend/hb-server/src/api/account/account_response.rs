use hb_core::{AccountView, StatusMessage};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// GET /api/account response
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Stored username, or the suggested default when none is stored
    pub username: String,
    /// True when `username` is a stored value rather than a suggestion
    pub has_profile: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<StatusMessage>,
}

impl From<AccountView> for AccountResponse {
    fn from(view: AccountView) -> Self {
        let has_profile = view.profile.as_ref().and_then(|p| p.handle()).is_some();

        Self {
            id: view.identity.id,
            email: view.identity.email,
            created_at: view.identity.created_at,
            username: view.handle,
            has_profile,
            message: view.message,
        }
    }
}
