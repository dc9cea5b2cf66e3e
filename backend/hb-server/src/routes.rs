use crate::{AppState, get_account, health, update_username, views};

use std::time::Duration;

use axum::{
    Router,
    routing::{get, put},
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};

const MAX_CONCURRENT_REQUESTS: usize = 256;
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(views::home::home))
        .route(
            "/account",
            get(views::account_page::show_account).post(views::account_page::submit_account),
        )
        // JSON API
        .route("/api/account", get(get_account))
        .route("/api/account/username", put(update_username))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .max_age(CORS_MAX_AGE),
        )
}
