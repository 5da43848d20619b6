//! In-memory store
//!
//! Used by tests and as the fallback when the browser refuses localStorage.

use std::collections::HashMap;

use super::traits::KeyValueStore;
use crate::error::{ListError, ListResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one slot
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every following `set` fail, as a full quota would
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ListResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ListResult<()> {
        if self.fail_writes {
            return Err(ListError::Storage(format!("write to '{}' rejected", key)));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
