use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ProfileUpsert<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub updated_at: DateTime<Utc>,
}
