//! Durable bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only session datum that survives a reload. It is written
//! by `Session::login`, removed by `Session::logout`/`bootstrap` and by the
//! gateway's 401 teardown, and read by the bearer-auth middleware stage.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token must not be empty")]
    Empty,
}

/// Key-value backend the token store persists through.
pub trait TokenBackend: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`, scoped to the page origin.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

#[cfg(feature = "csr")]
impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl TokenBackend for LocalStorageBackend {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn store(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("token store: localStorage unavailable, token not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("token store: localStorage rejected write for key {key:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("token store: localStorage rejected removal of key {key:?}");
            }
        }
    }
}

/// In-process backend for non-browser builds and tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl TokenBackend for MemoryBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Handle to the single persisted bearer token.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn TokenBackend>,
    key: String,
}

impl TokenStore {
    pub fn new(backend: Arc<dyn TokenBackend>, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    /// Store backed by memory; nothing survives the process.
    pub fn in_memory(key: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryBackend::default()), key)
    }

    /// `localStorage` in the browser, memory elsewhere.
    pub fn for_platform(key: impl Into<String>) -> Self {
        #[cfg(feature = "csr")]
        {
            Self::new(Arc::new(LocalStorageBackend), key)
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::in_memory(key)
        }
    }

    /// Current token. A stored empty string reads as absent.
    pub fn get(&self) -> Option<String> {
        self.backend.load(&self.key).filter(|token| !token.is_empty())
    }

    /// Persist `token` verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Empty`] for an empty string; the store is unchanged.
    pub fn set(&self, token: &str) -> Result<(), TokenError> {
        if token.is_empty() {
            return Err(TokenError::Empty);
        }
        self.backend.store(&self.key, token);
        Ok(())
    }

    /// Remove the token. Safe when already empty.
    pub fn clear(&self) {
        self.backend.remove(&self.key);
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("key", &self.key)
            .field("present", &self.get().is_some())
            .finish()
    }
}
