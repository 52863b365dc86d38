use pretty_assertions::assert_eq;
use shared_types::{MemoryStore, Role, Session, SessionKey, SessionStore, ALL_ROLES};

use crate::common;

#[test]
fn test_logout_clears_every_key() {
    let mut store = common::signed_in_store(Role::Employer, "Acme Recruiting", "hr@acme.io");
    store.set(SessionKey::UserId, "42").expect("memory store");
    store
        .set(SessionKey::SecondaryRoles, r#"["mentor"]"#)
        .expect("memory store");

    Session::clear(&mut store).expect("clear succeeds");

    assert_eq!(common::present_keys(&store), vec![]);
    assert!(store.is_empty());
}

#[test]
fn test_logout_then_mount_any_dashboard_is_denied() {
    let mut store = common::signed_in_store(Role::Admin, "Root Admin", "root@skillsyncer.com");
    Session::clear(&mut store).expect("clear succeeds");

    for role in ALL_ROLES {
        assert!(!common::mount(*role, &store).is_authorized(), "{role}");
    }
}

#[test]
fn test_logout_on_empty_store_is_harmless() {
    let mut store = MemoryStore::new();
    Session::clear(&mut store).expect("clear succeeds");
    Session::clear(&mut store).expect("clear is idempotent");
    assert!(store.is_empty());
}

#[test]
fn test_failed_key_does_not_stop_the_rest() {
    let inner = common::signed_in_store(Role::Mentor, "Dr. Lisa K.", "lisa@example.com");
    let mut store = common::StickyStore::new(inner, &[SessionKey::Token]);

    let err = Session::clear(&mut store).expect_err("token removal fails");
    assert!(err.message.contains("token"), "{err}");

    assert_eq!(common::present_keys(&store), vec![SessionKey::Token]);
    assert_eq!(common::session_in(&store), Session::default());
    assert!(!common::mount(Role::Mentor, &store).is_authorized());
}
