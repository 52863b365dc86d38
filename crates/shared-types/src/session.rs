use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{AppError, Role};

/// Fallback shown when the session carries no display name.
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// Fallback shown when the session carries no contact email.
pub const FALLBACK_EMAIL: &str = "user@example.com";

/// Keys the session occupies in the browser's local store.
///
/// Every read and write goes through this enum so a typo in a key name
/// cannot silently produce an empty session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    Token,
    Role,
    DisplayName,
    Email,
    UserId,
    SecondaryRoles,
}

/// Every session key, in the order logout removes them.
pub const ALL_SESSION_KEYS: &[SessionKey] = &[
    SessionKey::Token,
    SessionKey::Role,
    SessionKey::DisplayName,
    SessionKey::Email,
    SessionKey::UserId,
    SessionKey::SecondaryRoles,
];

impl SessionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::Token => "token",
            SessionKey::Role => "userRole",
            SessionKey::DisplayName => "userName",
            SessionKey::Email => "userEmail",
            SessionKey::UserId => "userId",
            SessionKey::SecondaryRoles => "secondaryRoles",
        }
    }
}

/// A string key-value store holding the session.
///
/// Implemented by the browser's `localStorage` in the app crate and by
/// [`MemoryStore`] for native builds and tests.
pub trait SessionStore {
    fn get(&self, key: SessionKey) -> Option<String>;
    fn set(&mut self, key: SessionKey, value: &str) -> Result<(), AppError>;
    fn remove(&mut self, key: SessionKey) -> Result<(), AppError>;
}

/// In-memory [`SessionStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: HashMap<&'static str, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: SessionKey, value: &str) -> Result<(), AppError> {
        self.values.insert(key.as_str(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: SessionKey) -> Result<(), AppError> {
        self.values.remove(key.as_str());
        Ok(())
    }
}

/// The client-held record of who is signed in.
///
/// Nothing here is verified against a server; the role marker alone decides
/// which dashboard may render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub role: Option<Role>,
    pub display_name: Option<String>,
    pub contact_email: Option<String>,
}

impl Session {
    /// Read the session from a store. Blank values count as absent and an
    /// unrecognised role marker reads as no role.
    pub fn load(store: &impl SessionStore) -> Self {
        let non_blank = |key| store.get(key).filter(|v: &String| !v.trim().is_empty());
        Self {
            role: store.get(SessionKey::Role).as_deref().and_then(Role::parse),
            display_name: non_blank(SessionKey::DisplayName),
            contact_email: non_blank(SessionKey::Email),
        }
    }

    /// Persist this session together with an opaque auth token.
    pub fn save(&self, store: &mut impl SessionStore, token: &str) -> Result<(), AppError> {
        store.set(SessionKey::Token, token)?;
        match self.role {
            Some(role) => store.set(SessionKey::Role, role.as_str())?,
            None => store.remove(SessionKey::Role)?,
        }
        match &self.display_name {
            Some(name) => store.set(SessionKey::DisplayName, name)?,
            None => store.remove(SessionKey::DisplayName)?,
        }
        match &self.contact_email {
            Some(email) => store.set(SessionKey::Email, email)?,
            None => store.remove(SessionKey::Email)?,
        }
        Ok(())
    }

    /// Remove every session key. Safe to call with nothing stored.
    ///
    /// All keys are attempted even if one removal fails, so a single
    /// failing key never leaves the role marker behind; the first error is
    /// returned afterwards.
    pub fn clear(store: &mut impl SessionStore) -> Result<(), AppError> {
        let mut first_err = None;
        for key in ALL_SESSION_KEYS {
            if let Err(err) = store.remove(*key) {
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Display name, or the placeholder when none is stored.
    pub fn display_name_or_fallback(&self) -> &str {
        self.display_name.as_deref().unwrap_or(FALLBACK_DISPLAY_NAME)
    }

    /// Contact email, or the placeholder when none is stored.
    pub fn email_or_fallback(&self) -> &str {
        self.contact_email.as_deref().unwrap_or(FALLBACK_EMAIL)
    }

    /// Name used in greetings: the first token of the display name that is
    /// not an honorific, so "Dr. Lisa K." greets "Lisa".
    pub fn first_name(&self) -> &str {
        self.display_name
            .as_deref()
            .and_then(|name| {
                let mut tokens = name.split_whitespace().peekable();
                let first = *tokens.peek()?;
                tokens.find(|t| !is_honorific(t)).or(Some(first))
            })
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }

    /// Upper-cased first character of the first name, for avatar badges.
    pub fn initial(&self) -> char {
        self.first_name()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

fn is_honorific(token: &str) -> bool {
    let bare = token.trim_end_matches('.');
    ["dr", "mr", "mrs", "ms", "mx", "prof"]
        .iter()
        .any(|h| bare.eq_ignore_ascii_case(h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> Session {
        Session {
            display_name: Some(name.to_string()),
            ..Session::default()
        }
    }

    #[test]
    fn load_from_empty_store_is_signed_out() {
        let session = Session::load(&MemoryStore::new());
        assert_eq!(session, Session::default());
    }

    #[test]
    fn save_then_load_preserves_fields() {
        let mut store = MemoryStore::new();
        let session = Session {
            role: Some(Role::Employer),
            display_name: Some("Acme Corp".into()),
            contact_email: Some("hr@acme.test".into()),
        };
        session.save(&mut store, "tok-1").unwrap();

        assert_eq!(store.get(SessionKey::Token).as_deref(), Some("tok-1"));
        assert_eq!(store.get(SessionKey::Role).as_deref(), Some("employer"));
        assert_eq!(Session::load(&store), session);
    }

    #[test]
    fn unknown_role_marker_reads_as_no_role() {
        let mut store = MemoryStore::new();
        store.set(SessionKey::Role, "superuser").unwrap();
        store.set(SessionKey::DisplayName, "Mallory").unwrap();
        let session = Session::load(&store);
        assert_eq!(session.role, None);
        assert_eq!(session.display_name.as_deref(), Some("Mallory"));
    }

    #[test]
    fn blank_name_reads_as_missing() {
        let mut store = MemoryStore::new();
        store.set(SessionKey::Role, "mentor").unwrap();
        store.set(SessionKey::DisplayName, "   ").unwrap();
        let session = Session::load(&store);
        assert_eq!(session.role, Some(Role::Mentor));
        assert_eq!(session.display_name, None);
        assert_eq!(session.display_name_or_fallback(), "User");
        assert_eq!(session.email_or_fallback(), "user@example.com");
    }

    #[test]
    fn clear_removes_every_key() {
        let mut store = MemoryStore::new();
        for key in ALL_SESSION_KEYS {
            store.set(*key, "x").unwrap();
        }
        Session::clear(&mut store).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn clear_on_empty_store_is_a_no_op() {
        let mut store = MemoryStore::new();
        Session::clear(&mut store).unwrap();
        Session::clear(&mut store).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn first_name_skips_honorifics() {
        assert_eq!(named("Dr. Lisa K.").first_name(), "Lisa");
        assert_eq!(named("prof Alan Turing").first_name(), "Alan");
        assert_eq!(named("Sarah Chen").first_name(), "Sarah");
    }

    #[test]
    fn first_name_keeps_a_lone_honorific() {
        assert_eq!(named("Dr.").first_name(), "Dr.");
    }

    #[test]
    fn first_name_falls_back_when_missing() {
        assert_eq!(Session::default().first_name(), "User");
        assert_eq!(named("").first_name(), "User");
    }

    #[test]
    fn initial_is_uppercased() {
        assert_eq!(named("emily watson").initial(), 'E');
        assert_eq!(Session::default().initial(), 'U');
    }
}
