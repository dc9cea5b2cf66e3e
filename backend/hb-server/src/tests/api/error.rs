use crate::ApiError;

use hb_core::{AccountError, ServiceError};

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_unauthenticated_when_rendered_then_401_without_field() {
    // Given
    let error = ApiError::from(AccountError::unauthenticated());

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(json["error"]["message"], "You must be logged in");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_too_short_when_rendered_then_400_with_username_field() {
    // Given
    let error = ApiError::from(AccountError::too_short(2));

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "TOO_SHORT");
    assert_eq!(json["error"]["message"], "Username must be at least 3 characters");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn given_invalid_characters_when_rendered_then_400() {
    let error = ApiError::from(AccountError::invalid_characters("bad name"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"]["message"],
        "Username can only contain letters, numbers, underscores, and hyphens"
    );
}

#[tokio::test]
async fn given_handle_taken_when_rendered_then_409() {
    // Given
    let error = ApiError::from(AccountError::handle_taken("alice"));

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "HANDLE_TAKEN");
    assert_eq!(json["error"]["message"], "This username is already taken");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn given_write_rejected_with_message_when_rendered_then_502_with_service_text() {
    // Given
    let source = ServiceError::rejected("42501", "permission denied for table profiles");
    let error = ApiError::from(AccountError::write_failed(&source));

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["message"], "permission denied for table profiles");
}

#[tokio::test]
async fn given_write_transport_failure_when_rendered_then_generic_retry_text() {
    // Given
    let source = ServiceError::request("connection refused");
    let error = ApiError::from(AccountError::write_failed(&source));

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        json["error"]["message"],
        "Failed to update username. Please try again."
    );
}

#[tokio::test]
async fn given_load_failed_when_rendered_then_500() {
    let source = ServiceError::request("timeout");
    let error = ApiError::from(AccountError::load_failed(&source));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Failed to load profile");
}
