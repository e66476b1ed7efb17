// ============================================================================
// STORAGE - Persistent key/value storage (localStorage on wasm, memory in tests)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to write '{key}' to storage")]
    Write { key: String },
}

/// Raw string storage. Values are stored as-is (no JSON quoting) so other
/// clients of the same origin read the same token strings.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store, used natively and when localStorage is disabled
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, StorageError};
    use web_sys::{window, Storage};

    /// window.localStorage
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn storage() -> Option<Storage> {
            window()?.local_storage().ok()?
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage()?.get_item(key).ok()?
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = Self::storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| {
                log::warn!("⚠️ [STORAGE] set_item('{}') failed: {:?}", key, e);
                StorageError::Write { key: key.to_string() }
            })
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            let storage = Self::storage().ok_or(StorageError::Unavailable)?;
            storage.remove_item(key).map_err(|e| {
                log::warn!("⚠️ [STORAGE] remove_item('{}') failed: {:?}", key, e);
                StorageError::Write { key: key.to_string() }
            })
        }
    }
}
