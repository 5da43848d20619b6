//! Storage Layer - Core Traits
//!
//! The backing store is an opaque string-keyed slot store.
//! Implementations can use browser localStorage, memory, etc.

use crate::error::ListResult;

/// Synchronous key-value string store
///
/// `set` overwrites the whole slot and is treated as atomic.
pub trait KeyValueStore {
    /// Read the slot at `key`, `None` if it was never written
    fn get(&self, key: &str) -> ListResult<Option<String>>;

    /// Overwrite the slot at `key`
    fn set(&mut self, key: &str, value: &str) -> ListResult<()>;
}
