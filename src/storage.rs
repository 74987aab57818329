//! Persistence Port
//!
//! Key-value storage behind the workspace store.
//! `BrowserStorage` talks to `window.localStorage`; `MemoryStorage` is the
//! in-process fake used by tests.

#[cfg(test)]
use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::collections::HashMap;

use wasm_bindgen::JsValue;

use crate::config;

/// Storage-layer errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
    #[error("failed to remove {key}: {message}")]
    Remove { key: String, message: String },
    #[error("failed to serialize workspace: {0}")]
    Serialize(String),
}

/// Durable string storage addressed by key
pub trait KeyValueStore {
    /// Read the value under `key` (None when absent)
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key succeeds
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage key for a workspace: `<prefix>-<workspace>`, blank maps to `default`
pub fn storage_key(workspace: &str) -> String {
    let workspace = workspace.trim();
    let workspace = if workspace.is_empty() {
        config::DEFAULT_WORKSPACE
    } else {
        workspace
    };
    format!("{}-{}", config::STORAGE_PREFIX, workspace)
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

pub(crate) fn js_message(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

impl KeyValueStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: js_message(e),
        })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // QuotaExceededError surfaces here
        Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_message(e),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(|e| StorageError::Remove {
            key: key.to_string(),
            message: js_message(e),
        })
    }
}

// ========================
// In-memory fake
// ========================

/// HashMap-backed storage; can be switched into a failing mode
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `load` fail as if storage were blocked
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make every subsequent `save` fail as if the quota were exceeded
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Store a raw value directly, bypassing serialization
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Read {
                key: key.to_string(),
                message: "access denied".to_string(),
            });
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
