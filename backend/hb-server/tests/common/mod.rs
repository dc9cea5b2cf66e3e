#![allow(dead_code)]

//! Test infrastructure for hb-server router tests

use hb_db::LocalBackend;
use hb_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub pool: SqlitePool,
    pub router: Router,
}

/// Router over an in-memory local backend with no dev user
pub async fn create_test_app() -> TestApp {
    create_test_app_with_dev_user(None).await
}

pub async fn create_test_app_with_dev_user(dev_user: Option<Uuid>) -> TestApp {
    let pool = hb_db::open_in_memory()
        .await
        .expect("Failed to create test database");
    let backend = LocalBackend::new(pool.clone(), dev_user);
    backend
        .ensure_dev_user(Some("dev@example.com"))
        .await
        .expect("Failed to create dev user");

    TestApp {
        pool,
        router: build_router(AppState::new(backend)),
    }
}

/// Create a test user and return its id (also its session token)
pub async fn create_test_user(pool: &SqlitePool, email: Option<&str>) -> Uuid {
    let user_id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, email, created_at) VALUES (?, ?, ?)")
        .bind(user_id.to_string())
        .bind(email)
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(pool)
        .await
        .expect("Failed to create test user");
    user_id
}

pub async fn create_test_profile(pool: &SqlitePool, user_id: Uuid, username: &str) {
    sqlx::query("INSERT INTO profiles (id, username, updated_at) VALUES (?, ?, ?)")
        .bind(user_id.to_string())
        .bind(username)
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(pool)
        .await
        .expect("Failed to create test profile");
}

pub async fn stored_username(pool: &SqlitePool, user_id: Uuid) -> Option<String> {
    sqlx::query_scalar::<_, Option<String>>("SELECT username FROM profiles WHERE id = ?")
        .bind(user_id.to_string())
        .fetch_optional(pool)
        .await
        .expect("Failed to read profile")
        .flatten()
}

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
