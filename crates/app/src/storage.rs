//! Persistent key/value store backing the session.
//!
//! Web builds use `window.localStorage`. Other targets share one in-process
//! `MemoryStore`, which lives as long as the app does.

use shared_types::{AppError, SessionKey, SessionStore};

/// Handle to the platform's local store. Cheap to create; holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(feature = "web")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, AppError> {
        let window = web_sys::window().ok_or_else(|| AppError::storage("Window not available"))?;
        window
            .local_storage()
            .map_err(|e| AppError::storage(format!("{e:?}")))?
            .ok_or_else(|| AppError::storage("Storage not available"))
    }
}

#[cfg(feature = "web")]
impl SessionStore for LocalStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        let storage = Self::storage().ok()?;
        match storage.get_item(key.as_str()) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = key.as_str(), error = ?e, "failed to read from local storage");
                None
            }
        }
    }

    fn set(&mut self, key: SessionKey, value: &str) -> Result<(), AppError> {
        Self::storage()?.set_item(key.as_str(), value).map_err(|e| {
            AppError::storage(format!("Failed to set item '{}': {e:?}", key.as_str()))
        })
    }

    fn remove(&mut self, key: SessionKey) -> Result<(), AppError> {
        Self::storage()?.remove_item(key.as_str()).map_err(|e| {
            AppError::storage(format!("Failed to remove item '{}': {e:?}", key.as_str()))
        })
    }
}

#[cfg(not(feature = "web"))]
mod memory {
    use std::sync::{Mutex, MutexGuard, OnceLock};

    use shared_types::{AppError, MemoryStore};

    static STORE: OnceLock<Mutex<MemoryStore>> = OnceLock::new();

    pub(super) fn lock() -> Result<MutexGuard<'static, MemoryStore>, AppError> {
        STORE
            .get_or_init(|| Mutex::new(MemoryStore::new()))
            .lock()
            .map_err(|_| AppError::storage("session store lock poisoned"))
    }
}

#[cfg(not(feature = "web"))]
impl SessionStore for LocalStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        memory::lock().ok()?.get(key)
    }

    fn set(&mut self, key: SessionKey, value: &str) -> Result<(), AppError> {
        memory::lock()?.set(key, value)
    }

    fn remove(&mut self, key: SessionKey) -> Result<(), AppError> {
        memory::lock()?.remove(key)
    }
}
