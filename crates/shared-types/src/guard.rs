use crate::{AppError, Role, Session, SessionStore};

/// Path every denied dashboard redirects to.
pub const AUTH_ENTRY_PATH: &str = "/auth";

/// Lifecycle of one dashboard mount.
///
/// A guard starts in `Loading` and leaves it exactly once. Both exits are
/// terminal for that mount: an `Authorized` view stays authorized until it
/// unmounts, a `Denied` view only ever redirects.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    Loading,
    Authorized(Session),
    Denied(DenyReason),
}

/// Why a mount was denied. Both reasons lead to the same redirect; the
/// distinction only feeds logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NoRole,
    WrongRole(Role),
}

impl From<DenyReason> for AppError {
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::NoRole => AppError::unauthorized("No signed-in role"),
            DenyReason::WrongRole(role) => {
                AppError::unauthorized(format!("Signed in as {}", role.label()))
            }
        }
    }
}

impl GuardState {
    pub fn is_authorized(&self) -> bool {
        matches!(self, GuardState::Authorized(_))
    }

    /// Where a view in this state must navigate, if anywhere.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardState::Denied(_) => Some(AUTH_ENTRY_PATH),
            _ => None,
        }
    }
}

/// Role check for one dashboard view.
///
/// Only the role marker gates access. A missing display name or email is
/// not a denial, and the stored auth token is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionGuard {
    required: Role,
    state: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Decided,
}

impl SessionGuard {
    pub fn new(required: Role) -> Self {
        Self {
            required,
            state: Phase::Pending,
        }
    }

    /// The verdict for a session, without consuming the guard.
    pub fn evaluate(required: Role, session: &Session) -> GuardState {
        match session.role {
            Some(role) if role == required => GuardState::Authorized(session.clone()),
            Some(role) => GuardState::Denied(DenyReason::WrongRole(role)),
            None => GuardState::Denied(DenyReason::NoRole),
        }
    }

    /// Leave `Loading` for the given session. Returns `None` if this guard
    /// has already decided, since a mount gets exactly one verdict.
    pub fn decide(&mut self, session: &Session) -> Option<GuardState> {
        if self.state == Phase::Decided {
            return None;
        }
        self.state = Phase::Decided;
        Some(Self::evaluate(self.required, session))
    }

    /// Read the session from the store and decide.
    pub fn decide_from_store(&mut self, store: &impl SessionStore) -> Option<GuardState> {
        let session = Session::load(store);
        self.decide(&session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, SessionKey};

    fn session(role: Option<Role>) -> Session {
        Session {
            role,
            ..Session::default()
        }
    }

    #[test]
    fn matching_role_is_authorized() {
        let verdict = SessionGuard::evaluate(Role::Employer, &session(Some(Role::Employer)));
        assert!(verdict.is_authorized());
        assert_eq!(verdict.redirect_target(), None);
    }

    #[test]
    fn other_role_is_denied_with_redirect() {
        let verdict = SessionGuard::evaluate(Role::Jobseeker, &session(Some(Role::Employer)));
        assert_eq!(verdict, GuardState::Denied(DenyReason::WrongRole(Role::Employer)));
        assert_eq!(verdict.redirect_target(), Some("/auth"));
    }

    #[test]
    fn missing_role_is_denied() {
        let verdict = SessionGuard::evaluate(Role::Admin, &session(None));
        assert_eq!(verdict, GuardState::Denied(DenyReason::NoRole));
    }

    #[test]
    fn deny_reason_becomes_unauthorized_error() {
        let err = AppError::from(DenyReason::WrongRole(Role::Employer));
        assert_eq!(err.kind, crate::AppErrorKind::Unauthorized);
        assert!(err.message.contains("Employer"), "{}", err.message);

        let err = AppError::from(DenyReason::NoRole);
        assert_eq!(err.kind, crate::AppErrorKind::Unauthorized);
    }

    #[test]
    fn loading_has_no_redirect() {
        assert_eq!(GuardState::Loading.redirect_target(), None);
        assert!(!GuardState::Loading.is_authorized());
    }

    #[test]
    fn guard_decides_only_once() {
        let mut guard = SessionGuard::new(Role::Mentor);
        let first = guard.decide(&session(None));
        assert!(matches!(first, Some(GuardState::Denied(_))));
        // A later sign-in does not flip this mount.
        assert_eq!(guard.decide(&session(Some(Role::Mentor))), None);
    }

    #[test]
    fn missing_name_does_not_deny() {
        let mut store = MemoryStore::new();
        store.set(SessionKey::Role, "employee").unwrap();
        let verdict = SessionGuard::new(Role::Employee)
            .decide_from_store(&store)
            .unwrap();
        match verdict {
            GuardState::Authorized(s) => assert_eq!(s.display_name_or_fallback(), "User"),
            other => panic!("expected Authorized, got {other:?}"),
        }
    }

    #[test]
    fn token_alone_is_not_enough() {
        let mut store = MemoryStore::new();
        store.set(SessionKey::Token, "abc").unwrap();
        let verdict = SessionGuard::new(Role::Jobseeker)
            .decide_from_store(&store)
            .unwrap();
        assert_eq!(verdict, GuardState::Denied(DenyReason::NoRole));
    }
}
