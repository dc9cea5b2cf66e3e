use crate::tests::{FakeService, identity};
use crate::{AccountForm, AccountLoader, ClaimPhase, MessageKind};

use googletest::prelude::*;

#[tokio::test]
async fn given_loaded_view_when_form_built_then_field_prefilled() {
    let zed = identity(Some("bob@example.com"));
    let service = FakeService::signed_in(zed.clone());
    let outcome = AccountLoader::new(&service).load(Some(zed)).await;

    let form = AccountForm::from_view(outcome.view().unwrap());

    assert_eq!(form.handle(), "bob");
    assert_that!(form.phase(), eq(ClaimPhase::Idle));
    assert!(form.message().is_none());
}

#[tokio::test]
async fn given_valid_edit_when_submitted_then_success_message() {
    // Given
    let zed = identity(Some("bob@example.com"));
    let service = FakeService::signed_in(zed.clone());
    let mut form = AccountForm::new("bob");
    form.edit("bobcat");

    // When
    let result = form.submit(&service, Some(&zed)).await;

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(form.phase(), eq(ClaimPhase::Succeeded));
    let message = form.message().unwrap();
    assert_that!(message.kind, eq(MessageKind::Success));
    assert_eq!(message.text, "Username updated successfully!");
}

#[tokio::test]
async fn given_invalid_edit_when_submitted_then_error_message_and_retry_allowed() {
    // Given
    let zed = identity(Some("bob@example.com"));
    let service = FakeService::signed_in(zed.clone());
    let mut form = AccountForm::new("bob");
    form.edit("b");

    // When
    let result = form.submit(&service, Some(&zed)).await;

    // Then
    assert_that!(result, err(anything()));
    assert_that!(form.phase(), eq(ClaimPhase::Failed));
    assert_eq!(
        form.message().unwrap().text,
        "Username must be at least 3 characters"
    );

    // Editing returns to Idle; the message stays until dismissed or resubmitted
    form.edit("bob_2");
    assert_that!(form.phase(), eq(ClaimPhase::Idle));
    assert!(form.message().is_some());

    let retry = form.submit(&service, Some(&zed)).await;
    assert_that!(retry, ok(anything()));
    assert_that!(form.message().unwrap().kind, eq(MessageKind::Success));
}

#[test]
fn given_message_when_dismissed_then_cleared() {
    let mut form = AccountForm::new("bob");
    form.edit("b");
    form.dismiss();

    assert!(form.message().is_none());
}
