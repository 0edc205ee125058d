//! Persistence Adapter
//!
//! The whole list lives as one JSON document under a single key. Every save
//! overwrites it; there are no partial writes.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{info, warn};

use crate::domain::{ItemRecord, StorageError, StorageResult};

/// String key-value store (browser `localStorage` or an in-memory map)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// In-memory store, used in tests and when the browser store is unavailable
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Make every write fail, like a full or locked-down browser store
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.read_only.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        if self.read_only.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// What a load found under the key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<ItemRecord>),
    /// Nothing saved yet (missing or blank value)
    Absent,
    /// A value exists but is not a list of records
    Corrupt(String),
}

pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> StorageResult<LoadOutcome> {
    let raw = match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            info!("[Persistence] Nothing saved under '{}'", key);
            return Ok(LoadOutcome::Absent);
        }
    };

    match serde_json::from_str::<Vec<ItemRecord>>(&raw) {
        Ok(records) => {
            info!("[Persistence] Loaded {} items from '{}'", records.len(), key);
            Ok(LoadOutcome::Loaded(records))
        }
        Err(e) => {
            warn!("[Persistence] Saved list under '{}' is corrupt: {}", key, e);
            Ok(LoadOutcome::Corrupt(e.to_string()))
        }
    }
}

pub fn save<S: KeyValueStore + ?Sized>(store: &S, key: &str, records: &[ItemRecord]) -> StorageResult<()> {
    let json = serde_json::to_string(records)?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KEY: &str = "bucket-list";

    #[test]
    fn test_load_absent() {
        let store = MemoryStore::new();
        assert_eq!(load(&store, KEY).unwrap(), LoadOutcome::Absent);
    }

    #[test]
    fn test_load_blank_is_absent() {
        let store = MemoryStore::with_entry(KEY, "  ");
        assert_eq!(load(&store, KEY).unwrap(), LoadOutcome::Absent);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let mut done = ItemRecord::new("Learn Spanish");
        done.complete = true;
        let records = vec![ItemRecord::new("Skydiving"), done];

        save(&store, KEY, &records).unwrap();
        assert_eq!(load(&store, KEY).unwrap(), LoadOutcome::Loaded(records));
    }

    #[test]
    fn test_save_writes_json_array() {
        let store = MemoryStore::new();
        save(&store, KEY, &[ItemRecord::new("a")]).unwrap();
        assert_eq!(
            store.raw(KEY).unwrap(),
            r#"[{"task":"a","complete":false,"show":true}]"#
        );
    }

    #[test]
    fn test_load_corrupt() {
        let store = MemoryStore::with_entry(KEY, "{not json");
        assert!(matches!(load(&store, KEY).unwrap(), LoadOutcome::Corrupt(_)));
    }

    #[test]
    fn test_load_wrong_shape_is_corrupt() {
        // plain strings are not records
        let store = MemoryStore::with_entry(KEY, r#"["Skydiving"]"#);
        assert!(matches!(load(&store, KEY).unwrap(), LoadOutcome::Corrupt(_)));
    }

    #[test]
    fn test_save_to_read_only_store_fails() {
        let store = MemoryStore::new();
        store.set_read_only(true);
        let err = save(&store, KEY, &[]).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }

    #[test]
    fn test_shared_store_through_rc() {
        let store = Rc::new(MemoryStore::new());
        let handle = Rc::clone(&store);
        save(&handle, KEY, &[ItemRecord::new("x")]).unwrap();
        assert!(store.raw(KEY).is_some());
    }
}
