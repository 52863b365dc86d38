use pretty_assertions::assert_eq;
use shared_types::{
    DenyReason, GuardState, MemoryStore, Role, SessionGuard, SessionKey, SessionStore, ALL_ROLES,
    AUTH_ENTRY_PATH,
};

use crate::common;

#[test]
fn test_matching_role_is_authorized_on_its_own_dashboard_only() {
    for held in ALL_ROLES {
        let store = common::store_with(&[(SessionKey::Role, held.as_str())]);
        for required in ALL_ROLES {
            let verdict = common::mount(*required, &store);
            assert_eq!(verdict.is_authorized(), held == required, "{held} on {required}");
        }
    }
}

#[test]
fn test_empty_store_denies_every_dashboard() {
    let store = MemoryStore::new();
    for role in ALL_ROLES {
        assert_eq!(
            common::mount(*role, &store),
            GuardState::Denied(DenyReason::NoRole)
        );
    }
}

#[test]
fn test_denied_verdict_redirects_to_auth() {
    let store = common::store_with(&[(SessionKey::Role, "employer")]);
    let verdict = common::mount(Role::Admin, &store);
    assert_eq!(verdict, GuardState::Denied(DenyReason::WrongRole(Role::Employer)));
    assert_eq!(verdict.redirect_target(), Some(AUTH_ENTRY_PATH));
    assert_eq!(AUTH_ENTRY_PATH, "/auth");
}

#[test]
fn test_authorized_verdict_does_not_redirect() {
    let store = common::store_with(&[(SessionKey::Role, "mentor")]);
    let verdict = common::mount(Role::Mentor, &store);
    assert_eq!(verdict.redirect_target(), None);
}

#[test]
fn test_role_marker_is_case_sensitive() {
    let store = common::store_with(&[(SessionKey::Role, "Admin")]);
    assert!(!common::mount(Role::Admin, &store).is_authorized());
}

#[test]
fn test_unknown_role_marker_reads_as_no_role() {
    let store = common::store_with(&[(SessionKey::Role, "superuser")]);
    assert_eq!(
        common::mount(Role::Admin, &store),
        GuardState::Denied(DenyReason::NoRole)
    );
}

#[test]
fn test_token_is_not_consulted() {
    let no_token = common::store_with(&[(SessionKey::Role, "jobseeker")]);
    assert!(common::mount(Role::Jobseeker, &no_token).is_authorized());

    let token_only = common::store_with(&[(SessionKey::Token, "abc")]);
    assert!(!common::mount(Role::Jobseeker, &token_only).is_authorized());
}

#[test]
fn test_missing_profile_fields_do_not_deny() {
    let store = common::store_with(&[(SessionKey::Role, "employee")]);
    match common::mount(Role::Employee, &store) {
        GuardState::Authorized(session) => {
            assert_eq!(session.display_name_or_fallback(), "User");
            assert_eq!(session.email_or_fallback(), "user@example.com");
        }
        other => panic!("expected authorized, got {other:?}"),
    }
}

#[test]
fn test_secondary_roles_do_not_grant_access() {
    let store = common::store_with(&[
        (SessionKey::Role, "employee"),
        (SessionKey::SecondaryRoles, r#"["mentor"]"#),
    ]);
    assert!(!common::mount(Role::Mentor, &store).is_authorized());
}

#[test]
fn test_guard_decides_once_per_mount() {
    let mut store = common::store_with(&[(SessionKey::Role, "admin")]);
    let mut guard = SessionGuard::new(Role::Admin);
    assert!(guard
        .decide_from_store(&store)
        .is_some_and(|v| v.is_authorized()));

    store.set(SessionKey::Role, "jobseeker").expect("memory store");
    assert_eq!(guard.decide_from_store(&store), None);
}

#[test]
fn test_remount_reads_the_store_again() {
    let mut store = common::store_with(&[(SessionKey::Role, "admin")]);
    assert!(common::mount(Role::Admin, &store).is_authorized());

    store.set(SessionKey::Role, "mentor").expect("memory store");
    assert!(!common::mount(Role::Admin, &store).is_authorized());
}
