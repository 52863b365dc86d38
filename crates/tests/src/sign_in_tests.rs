use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role, SessionKey, SessionStore, SignInRequest};

use crate::common;

fn request(name: &str, email: &str, role: Role) -> SignInRequest {
    SignInRequest {
        display_name: name.to_string(),
        email: email.to_string(),
        role,
    }
}

#[test]
fn test_sign_in_writes_role_name_and_email() {
    let store = common::signed_in_store(Role::Jobseeker, "  Ada Lovelace ", "Ada@Example.com ");

    assert_eq!(store.get(SessionKey::Role).as_deref(), Some("jobseeker"));
    assert_eq!(store.get(SessionKey::DisplayName).as_deref(), Some("Ada Lovelace"));
    assert_eq!(store.get(SessionKey::Email).as_deref(), Some("ada@example.com"));
    assert_eq!(store.get(SessionKey::Token).as_deref(), Some("test-token"));
}

#[test]
fn test_signed_in_role_opens_its_dashboard() {
    for role in shared_types::ALL_ROLES {
        let store = common::signed_in_store(*role, "Sam Patel", "sam@example.com");
        assert!(common::mount(*role, &store).is_authorized(), "{role}");
    }
}

#[test]
fn test_blank_name_is_rejected_with_field_error() {
    let err = request("   ", "sam@example.com", Role::Mentor)
        .into_session()
        .expect_err("blank name");

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("display_name").map(String::as_str),
        Some("Name is required")
    );
}

#[test]
fn test_bad_email_is_rejected_with_field_error() {
    let err = request("Sam Patel", "not-an-email", Role::Employer)
        .into_session()
        .expect_err("bad email");

    assert_eq!(
        err.field_errors.get("email").map(String::as_str),
        Some("Valid email is required")
    );
    assert_eq!(err.friendly_message(), err.message);
}
