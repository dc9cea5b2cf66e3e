use crate::tests::identity;


#[test]
fn given_email_when_default_handle_then_local_part() {
    let identity = identity(Some("bob@example.com"));

    assert_eq!(identity.default_handle(), "bob");
}

#[test]
fn given_empty_local_part_when_default_handle_then_fallback() {
    let identity = identity(Some("@example.com"));

    assert_eq!(identity.default_handle(), "user");
}

#[test]
fn given_no_email_when_default_handle_then_fallback() {
    let identity = identity(None);

    assert_eq!(identity.default_handle(), "user");
}

#[test]
fn given_email_with_several_at_signs_when_default_handle_then_text_before_first() {
    let identity = identity(Some("first@second@example.com"));

    assert_eq!(identity.default_handle(), "first");
}

#[test]
fn given_address_without_at_sign_when_default_handle_then_whole_address() {
    let identity = identity(Some("localonly"));

    assert_eq!(identity.default_handle(), "localonly");
}
