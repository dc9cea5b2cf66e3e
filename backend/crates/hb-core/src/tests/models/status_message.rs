use crate::{AccountError, MessageKind, ServiceError, StatusMessage};

use googletest::prelude::*;

#[test]
fn given_status_message_when_serialized_then_uses_type_field() {
    let message = StatusMessage::username_updated();

    let json = serde_json::to_value(&message).unwrap();

    assert!(!message.is_error());
    assert_eq!(json["type"], "success");
    assert_eq!(json["text"], "Username updated successfully!");
}

#[test]
fn given_write_failure_with_service_message_when_converted_then_message_surfaces() {
    let source = ServiceError::rejected("23505", "duplicate key value");
    let error = AccountError::write_failed(&source);

    let message = StatusMessage::from(&error);

    assert_that!(message.kind, eq(MessageKind::Error));
    assert!(message.is_error());
    assert_eq!(message.text, "duplicate key value");
}

#[test]
fn given_write_failure_without_service_message_when_converted_then_retry_prompt() {
    let source = ServiceError::request("connection reset");
    let error = AccountError::write_failed(&source);

    let message = StatusMessage::from(&error);

    assert_eq!(message.text, "Failed to update username. Please try again.");
}

#[test]
fn given_load_failure_when_converted_then_generic_text() {
    let error = AccountError::load_failed(&ServiceError::request("timeout"));

    assert_eq!(StatusMessage::from(&error).text, "Failed to load profile");
    assert_eq!(error.code(), "LOAD_FAILED");
}
