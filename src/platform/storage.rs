//! Browser Storage
//!
//! `window.localStorage` behind the core `KeyValueStore` trait.

use list_keeper_core::{KeyValueStore, ListError, ListResult, MemoryStore};
use wasm_bindgen::JsValue;

pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    pub fn open() -> ListResult<Self> {
        let window = web_sys::window().ok_or_else(|| ListError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| ListError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> ListResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> ListResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

fn js_error(e: JsValue) -> ListError {
    ListError::Storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// localStorage when the browser grants it, memory otherwise
pub enum BrowserStore {
    Local(WebStorage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match WebStorage::open() {
            Ok(storage) => BrowserStore::Local(storage),
            Err(e) => {
                tracing::warn!("{}; lists will not survive a reload", e);
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> ListResult<Option<String>> {
        match self {
            BrowserStore::Local(storage) => storage.get(key),
            BrowserStore::Memory(storage) => storage.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> ListResult<()> {
        match self {
            BrowserStore::Local(storage) => storage.set(key, value),
            BrowserStore::Memory(storage) => storage.set(key, value),
        }
    }
}
