use std::collections::HashSet;

use shared_types::{
    AppError, GuardState, MemoryStore, Role, Session, SessionGuard, SessionKey, SessionStore,
    SignInRequest,
};

/// A store holding exactly the given raw values.
pub fn store_with(entries: &[(SessionKey, &str)]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for (key, value) in entries {
        store.set(*key, value).expect("memory store never fails");
    }
    store
}

/// A store as left behind by a completed sign-in.
pub fn signed_in_store(role: Role, name: &str, email: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    let session = SignInRequest {
        display_name: name.to_string(),
        email: email.to_string(),
        role,
    }
    .into_session()
    .expect("valid sign-in");
    session
        .save(&mut store, "test-token")
        .expect("memory store never fails");
    store
}

/// Mount a fresh guard for `required` against `store` and return its verdict.
pub fn mount(required: Role, store: &impl SessionStore) -> GuardState {
    SessionGuard::new(required)
        .decide_from_store(store)
        .expect("a fresh guard always decides")
}

/// Every store key that currently holds a value.
pub fn present_keys(store: &impl SessionStore) -> Vec<SessionKey> {
    shared_types::ALL_SESSION_KEYS
        .iter()
        .copied()
        .filter(|key| store.get(*key).is_some())
        .collect()
}

/// Wraps a `MemoryStore` and refuses to remove the listed keys.
pub struct StickyStore {
    pub inner: MemoryStore,
    pub sticky: HashSet<&'static str>,
}

impl StickyStore {
    pub fn new(inner: MemoryStore, sticky: &[SessionKey]) -> Self {
        Self {
            inner,
            sticky: sticky.iter().map(|k| k.as_str()).collect(),
        }
    }
}

impl SessionStore for StickyStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: SessionKey, value: &str) -> Result<(), AppError> {
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: SessionKey) -> Result<(), AppError> {
        if self.sticky.contains(key.as_str()) {
            return Err(AppError::storage(format!("cannot remove {}", key.as_str())));
        }
        self.inner.remove(key)
    }
}

/// Session read back from a store, for asserting on what a view would see.
pub fn session_in(store: &impl SessionStore) -> Session {
    Session::load(store)
}
