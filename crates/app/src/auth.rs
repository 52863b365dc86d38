use dioxus::prelude::*;
use shared_types::{AppError, Role, Session, SessionKey, SessionStore, SignInRequest};

use crate::storage::LocalStore;

/// Reactive mirror of the session held in local storage.
///
/// The store stays the source of truth: the guard reads the store directly,
/// and every mutation here writes the store before the signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionContext {
    pub current: Signal<Session>,
}

impl SessionContext {
    /// Hydrate from whatever the store holds at startup.
    pub fn new() -> Self {
        let session = Session::load(&LocalStore);
        tracing::debug!(role = ?session.role, "session hydrated from store");
        Self {
            current: Signal::new(session),
        }
    }

    /// Validate a sign-in form, persist the resulting session and return the
    /// role whose dashboard should open next.
    pub fn sign_in(&mut self, request: SignInRequest) -> Result<Role, AppError> {
        let session = request.into_session()?;
        let role = session
            .role
            .ok_or_else(|| AppError::internal("sign-in produced no role"))?;

        let mut store = LocalStore;
        session.save(&mut store, &local_token(role))?;
        store.remove(SessionKey::SecondaryRoles)?;

        tracing::info!(role = %role, "signed in");
        self.current.set(session);
        Ok(role)
    }

    /// Clear every session key and reset the mirror. The mirror is reset even
    /// if the store reports an error.
    pub fn logout(&mut self) {
        if let Err(err) = Session::clear(&mut LocalStore) {
            tracing::warn!(error = %err, "failed to clear session store");
        }
        self.current.set(Session::default());
        tracing::info!("signed out");
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Opaque marker stored under the token key. Nothing ever verifies it.
fn local_token(role: Role) -> String {
    format!("local-{}-{}", role.as_str(), chrono::Utc::now().timestamp_millis())
}
