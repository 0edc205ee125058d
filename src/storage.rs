//! Browser Storage
//!
//! `localStorage` behind the core `KeyValueStore` trait, with an in-memory
//! fallback for browsers that block it (private mode, disabled storage).

use bucket_core::{KeyValueStore, MemoryStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// `window.localStorage`
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }
}

/// Whichever store the app ended up with
pub enum BrowserStore {
    Web(WebStorage),
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Prefer `localStorage`, fall back to memory (nothing survives a reload)
    pub fn open() -> (Self, Option<StorageError>) {
        match WebStorage::open() {
            Ok(web) => (BrowserStore::Web(web), None),
            Err(e) => {
                log::warn!("[Storage] localStorage unavailable, keeping list in memory: {}", e);
                (BrowserStore::Memory(MemoryStore::new()), Some(e))
            }
        }
    }

    fn inner(&self) -> &dyn KeyValueStore {
        match self {
            BrowserStore::Web(web) => web,
            BrowserStore::Memory(memory) => memory,
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner().get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner().set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner().remove(key)
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
