#![allow(dead_code)]

use hb_core::Identity;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    hb_db::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user row so profiles can reference it
pub async fn create_test_user(pool: &SqlitePool, user_id: Uuid, email: Option<&str>) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO users (id, email, created_at) VALUES (?, ?, ?)")
        .bind(user_id.to_string())
        .bind(email)
        .bind(Utc::now().timestamp_millis())
        .execute(pool)
        .await
        .expect("Failed to create test user");
}

/// Inserts a profile row directly, bypassing the repository
pub async fn create_test_profile(pool: &SqlitePool, user_id: Uuid, username: Option<&str>) {
    sqlx::query("INSERT INTO profiles (id, username, updated_at) VALUES (?, ?, ?)")
        .bind(user_id.to_string())
        .bind(username)
        .bind(Utc::now().timestamp_millis())
        .execute(pool)
        .await
        .expect("Failed to create test profile");
}

/// Creates a test Identity with a millisecond-precision creation time
pub fn create_test_identity(email: Option<&str>) -> Identity {
    Identity::new(Uuid::new_v4(), email.map(String::from), millis_now())
}

/// Current time truncated to what the database stores
pub fn millis_now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap()
}
