use crate::views::account_page::{render_account, render_signed_out};
use crate::views::html::{escape, page, status_message};

use hb_core::{AccountForm, Identity, StatusMessage};

use chrono::{TimeZone, Utc};
use uuid::Uuid;

#[test]
fn given_markup_when_escaped_then_entities_used() {
    assert_eq!(
        escape(r#"<script>alert("x & 'y'")</script>"#),
        "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
    );
}

#[test]
fn given_page_title_when_page_rendered_then_site_title_and_description_included() {
    let html = page(Some("Account Settings"), "<p>x</p>");

    assert!(html.contains(
        "<title>Account Settings | HabitBattle - Build habits with friends</title>"
    ));
    assert!(html.contains(
        r#"<meta name="description" content="Build habits with friends, level up, and never miss a streak again.">"#
    ));
}

#[test]
fn given_no_page_title_when_page_rendered_then_site_title_only() {
    let html = page(None, "");

    assert!(html.contains("<title>HabitBattle - Build habits with friends</title>"));
}

#[test]
fn given_no_message_when_rendered_then_empty() {
    assert_eq!(status_message(None), "");
}

#[test]
fn given_error_message_when_rendered_then_kind_class_and_dismiss_link() {
    // Given
    let message = StatusMessage::error("This username is already taken");

    // When
    let html = status_message(Some(&message));

    // Then
    assert!(html.contains("message-error"));
    assert!(html.contains("This username is already taken"));
    assert!(html.contains(r#"href="/account""#));
}

#[test]
fn given_signed_out_when_rendered_then_login_prompt() {
    let html = render_signed_out(None);

    assert!(html.contains("Please log in to view your account settings."));
    assert!(!html.contains("<form"));
}

#[test]
fn given_identity_when_account_rendered_then_fields_and_info_shown() {
    // Given
    let id = Uuid::new_v4();
    let created = Utc.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
    let identity = Identity::new(id, Some("bob@example.com".to_string()), created);
    let form = AccountForm::new("bob");

    // When
    let html = render_account(&identity, &form);

    // Then
    assert!(html.contains(r#"value="bob@example.com""#));
    assert!(html.contains(r#"name="username" type="text" value="bob""#));
    assert!(html.contains(&id.to_string()));
    assert!(html.contains("March 7, 2026"));
}

#[test]
fn given_hostile_handle_when_account_rendered_then_escaped() {
    // Given
    let identity = Identity::new(Uuid::new_v4(), None, Utc::now());
    let form = AccountForm::new(r#""><script>x</script>"#);

    // When
    let html = render_account(&identity, &form);

    // Then
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
