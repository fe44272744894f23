//! Typed key-value persistence over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every piece of user data on the site (listings and the two waitlist
//! records) lives in the visitor's browser. Pages talk to the
//! [`KeyValueStore`] trait so the same load/save paths run against
//! `localStorage` in the browser and against an in-memory store in tests.
//!
//! ERROR HANDLING
//! ==============
//! Reads and writes return [`StorageError`]. [`load_or`] is the fallback path
//! for page state: it logs the failure and hands back the default, so a
//! cleared or corrupted key never breaks rendering but is never silent either.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Storage key for the listing collection.
pub const LISTINGS_KEY: &str = "openacre_listings";
/// Storage key for the single owner waitlist record.
pub const OWNER_WAITLIST_KEY: &str = "openacre_owner_waitlist";
/// Storage key for the single hunter waitlist record.
pub const HUNTER_WAITLIST_KEY: &str = "openacre_hunter_waitlist";

/// Failures reading or writing persisted values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists here (server render, or storage disabled).
    #[error("local storage is unavailable")]
    Unavailable,

    /// The backend rejected the operation (quota, privacy mode, ...).
    #[error("local storage access failed: {0}")]
    Access(String),

    /// A stored value is not valid JSON for the expected type.
    #[error("stored value for `{key}` is malformed: {message}")]
    Corrupt { key: String, message: String },

    /// A value could not be serialized.
    #[error("value for `{key}` could not be encoded: {message}")]
    Encode { key: String, message: String },
}

/// String key-value storage.
pub trait KeyValueStore {
    /// Read the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or refuses the read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Only reachable in hydrate builds; elsewhere every
/// call reports [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window.local_storage().map_err(js_error)?.ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// In-process store backing the persistence tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Load and decode the JSON value stored under `key`.
///
/// An absent key or an empty string yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] for undecodable values, or the backend's
/// error if the read itself fails.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)?.filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt { key: key.to_owned(), message: e.to_string() })
}

/// Encode `value` as JSON and store it under `key`, replacing any old value.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails, or the backend's
/// error if the write fails.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Encode { key: key.to_owned(), message: e.to_string() })?;
    store.set(key, &raw)
}

/// Load `key`, falling back to `default()` when it is absent or unreadable.
///
/// Failures are logged: a missing backend at debug level (expected during
/// server rendering), everything else at warn level.
pub fn load_or<T, S, F>(store: &S, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
    F: FnOnce() -> T,
{
    match load_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => default(),
        Err(StorageError::Unavailable) => {
            log::debug!("{key}: local storage unavailable, using defaults");
            default()
        }
        Err(err) => {
            log::warn!("{key}: {err}; using defaults");
            default()
        }
    }
}
