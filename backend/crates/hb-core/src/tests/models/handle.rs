use crate::{AccountError, Handle};

use googletest::prelude::*;

#[test]
fn given_valid_candidate_when_parsed_then_ok() {
    let handle = Handle::parse("alice_01-x").unwrap();

    assert_eq!(handle.as_str(), "alice_01-x");
}

#[test]
fn given_exact_length_bounds_when_parsed_then_ok() {
    assert_that!(Handle::parse("abc"), ok(anything()));
    assert_that!(Handle::parse(&"a".repeat(30)), ok(anything()));
}

#[test]
fn given_empty_candidate_when_parsed_then_empty_handle() {
    let result = Handle::parse("");

    assert!(matches!(result, Err(AccountError::EmptyHandle { .. })));
}

#[test]
fn given_whitespace_only_candidate_when_parsed_then_empty_handle() {
    let result = Handle::parse(" \t  \n");

    assert!(matches!(result, Err(AccountError::EmptyHandle { .. })));
}

#[test]
fn given_two_characters_when_parsed_then_too_short() {
    let result = Handle::parse("ab");

    assert!(matches!(result, Err(AccountError::TooShort { length: 2, .. })));
}

#[test]
fn given_short_candidate_with_padding_when_parsed_then_length_counts_untrimmed() {
    // " ab" is three characters untrimmed, so it gets past the length rule
    // and fails on the space instead
    let result = Handle::parse(" ab");
    assert!(matches!(result, Err(AccountError::InvalidCharacters { .. })));

    let result = Handle::parse(" a");
    assert!(matches!(result, Err(AccountError::TooShort { length: 2, .. })));
}

#[test]
fn given_thirty_one_characters_when_parsed_then_too_long() {
    let result = Handle::parse(&"a".repeat(31));

    assert!(matches!(result, Err(AccountError::TooLong { length: 31, .. })));
}

#[test]
fn given_disallowed_characters_when_parsed_then_invalid_characters() {
    for candidate in ["bad name", "a.b.c", "héllo", "semi;colon", "tab\there", "emoji🙂"] {
        let result = Handle::parse(candidate);
        assert!(
            matches!(result, Err(AccountError::InvalidCharacters { .. })),
            "expected InvalidCharacters for {candidate:?}, got {result:?}"
        );
    }
}

#[test]
fn given_two_non_ascii_characters_when_parsed_then_length_rule_wins() {
    let result = Handle::parse("éé");

    assert!(matches!(result, Err(AccountError::TooShort { length: 2, .. })));
}

#[test]
fn given_handle_when_serialized_then_plain_string() {
    let handle = Handle::parse("charlie1").unwrap();

    let json = serde_json::to_string(&handle).unwrap();

    assert_eq!(json, "\"charlie1\"");
}

#[test]
fn given_invalid_string_when_deserialized_then_rejected() {
    let result = serde_json::from_str::<Handle>("\"a b\"");

    assert_that!(result, err(anything()));
}

#[test]
fn given_valid_string_when_deserialized_then_parsed_and_trimmed_like_parse() {
    let handle: Handle = serde_json::from_str("\"charlie1\"").unwrap();

    assert_eq!(handle, Handle::parse("charlie1").unwrap());
}

#[test]
fn given_each_validation_error_when_rendered_then_user_message_matches() {
    assert_eq!(
        AccountError::empty_handle().user_message(),
        "Username cannot be empty"
    );
    assert_eq!(
        AccountError::too_short(2).user_message(),
        "Username must be at least 3 characters"
    );
    assert_eq!(
        AccountError::too_long(31).user_message(),
        "Username must be less than 30 characters"
    );
    assert_eq!(
        AccountError::invalid_characters("a b").user_message(),
        "Username can only contain letters, numbers, underscores, and hyphens"
    );
}
