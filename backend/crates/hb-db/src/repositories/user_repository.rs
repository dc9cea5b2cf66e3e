use crate::Result as DbErrorResult;
use crate::repositories::{from_millis, parse_uuid};

use hb_core::Identity;

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, email, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<Identity> {
            let id: String = r.try_get("id")?;
            let created_at: i64 = r.try_get("created_at")?;

            Ok(Identity {
                id: parse_uuid("users", "id", &id)?,
                email: r.try_get("email")?,
                created_at: from_millis("users", "created_at", created_at)?,
            })
        })
        .transpose()
    }

    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        let id = identity.id.to_string();
        let created_at = identity.created_at.timestamp_millis();

        sqlx::query(
            r#"
                INSERT INTO users (id, email, created_at)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(identity.email.as_deref())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert the user unless a row with the same id exists. Returns true if inserted.
    pub async fn ensure(&self, identity: &Identity) -> DbErrorResult<bool> {
        let id = identity.id.to_string();
        let created_at = identity.created_at.timestamp_millis();

        let result = sqlx::query("INSERT OR IGNORE INTO users (id, email, created_at) VALUES (?, ?, ?)")
            .bind(id)
            .bind(identity.email.as_deref())
            .bind(created_at)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
