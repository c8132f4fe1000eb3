use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};
use types::{Result, SESSION_STORAGE_KEY, User, decode_session, encode_session};

/// Where the session record lives between page loads.
pub trait SessionBackend {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Handle to the persisted session, shared through context instead of being
/// looked up ad hoc by every component.
///
/// The record is always read and written whole.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    pub fn memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// `localStorage` in the browser, memory everywhere else.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStorageBackend)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::memory()
        }
    }

    /// The signed-in user. A record that no longer parses counts as signed out.
    pub fn user(&self) -> Option<User> {
        let raw = self.backend.load(SESSION_STORAGE_KEY)?;
        match decode_session(&raw) {
            Ok(user) => user,
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable session record");
                None
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.user().is_some()
    }

    pub fn sign_in(&self, user: &User) -> Result<()> {
        let encoded = encode_session(user)?;
        self.backend.save(SESSION_STORAGE_KEY, &encoded)
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove(SESSION_STORAGE_KEY)
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionBackend for MemoryBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionBackend for LocalStorageBackend {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| types::Error::Storage("localStorage is unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| types::Error::Storage(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| types::Error::Storage("localStorage is unavailable".into()))?;
        storage
            .remove_item(key)
            .map_err(|e| types::Error::Storage(format!("{e:?}")))
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
