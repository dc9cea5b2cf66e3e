use crate::Result as DbErrorResult;
use crate::repositories::{from_millis, parse_uuid};

use hb_core::Profile;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Profile>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, username, updated_at
                FROM profiles
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_profile).transpose()
    }

    /// Profile holding exactly `username` (case-sensitive), other than `excluding_id`.
    pub async fn find_by_username_excluding(
        &self,
        username: &str,
        excluding_id: Uuid,
    ) -> DbErrorResult<Option<Profile>> {
        let excluding_id_str = excluding_id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, username, updated_at
                FROM profiles
                WHERE username = ? AND id != ?
                LIMIT 1
            "#,
        )
        .bind(username)
        .bind(excluding_id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_profile).transpose()
    }

    /// Insert the profile, or overwrite username and updated_at when it exists.
    ///
    /// Fails with a unique violation when another profile holds `username`.
    pub async fn upsert(
        &self,
        id: Uuid,
        username: &str,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        let id_str = id.to_string();
        let updated_at = updated_at.timestamp_millis();

        sqlx::query(
            r#"
                INSERT INTO profiles (id, username, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    username = excluded.username,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(id_str)
        .bind(username)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn map_profile(r: &SqliteRow) -> DbErrorResult<Profile> {
    let id: String = r.try_get("id")?;
    let updated_at: Option<i64> = r.try_get("updated_at")?;

    Ok(Profile {
        id: parse_uuid("profiles", "id", &id)?,
        username: r.try_get("username")?,
        updated_at: updated_at
            .map(|ms| from_millis("profiles", "updated_at", ms))
            .transpose()?,
    })
}
