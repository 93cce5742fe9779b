use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::{Key, KeyValueStore, StoreError};

/// Volatile store, mainly used for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage(Mutex<BTreeMap<Key, String>>);

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: Key) -> Result<Option<String>, StoreError> {
        Ok(self
            .0
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .get(&key)
            .cloned())
    }

    fn set(&self, key: Key, value: &str) -> Result<(), StoreError> {
        self.0
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: Key) -> Result<(), StoreError> {
        self.0
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .remove(&key);
        Ok(())
    }
}
