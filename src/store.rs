//! Preference store over browser `localStorage`.
//!
//! `localStorage` can be missing, disabled, or throw on access (private
//! browsing, storage quotas, sandboxed iframes). [`PreferenceStore`] turns
//! every such failure into a logged warning: reads fall back to "not set"
//! and writes are dropped.

#[cfg(test)]
#[path = "store_test.rs"]
pub(crate) mod store_test;

use web_sys::Storage;

use crate::dom;
use crate::error::PageError;

/// String key-value backend.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// The page's `window.localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, PageError> {
        dom::window()?
            .local_storage()
            .map_err(PageError::storage)?
            .ok_or(PageError::StorageUnavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError> {
        Self::storage()?.get_item(key).map_err(PageError::storage)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError> {
        Self::storage()?.set_item(key, value).map_err(PageError::storage)
    }
}

/// A single string preference under a fixed key.
pub struct PreferenceStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored value, or `None` when unset, empty, or unreadable.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        match self.backend.get_item(&self.key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(err) => {
                log::warn!("preference `{}` not readable: {err}", self.key);
                None
            }
        }
    }

    /// Persist `value`. Failures are logged and dropped.
    pub fn set(&self, value: &str) {
        if let Err(err) = self.backend.set_item(&self.key, value) {
            log::warn!("preference `{}` not saved: {err}", self.key);
        }
    }
}
