use hb_core::Profile;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Columns selected from the `profiles` table
#[derive(Debug, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile::new(row.id, row.username, row.updated_at)
    }
}
