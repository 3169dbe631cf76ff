//! In-memory storage backend for tests and throwaway sessions.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, RibbonError};

use super::traits::{KeyValueStore, StorageOp};

/// A `KeyValueStore` backed by an in-process map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the map, returning an error if the mutex is poisoned.
    fn lock_entries(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| RibbonError::Storage("Memory store poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock_entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock_entries()?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock_entries()?.remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .lock_entries()?
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }

    fn apply(&self, ops: &[StorageOp]) -> Result<()> {
        let mut entries = self.lock_entries()?;
        for op in ops {
            match op {
                StorageOp::Set { key, value } => {
                    entries.insert(key.clone(), value.clone());
                }
                StorageOp::Remove { key } => {
                    entries.remove(key);
                }
            }
        }
        Ok(())
    }
}
