//! JSON codec for the persisted collection
//!
//! Slot format: `[{"id":1,"name":"...","items":[{"id":1,"description":"..."}]}]`

use super::traits::KeyValueStore;
use crate::domain::Collection;
use crate::error::{ListError, ListResult};

pub fn to_json(collection: &Collection) -> ListResult<String> {
    serde_json::to_string(collection).map_err(|e| ListError::Encode(e.to_string()))
}

pub fn from_json(json: &str) -> ListResult<Collection> {
    serde_json::from_str(json).map_err(|e| ListError::CorruptState(e.to_string()))
}

/// Read the collection from `key`; an absent slot is an empty collection
pub fn load_collection<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> ListResult<Collection> {
    match store.get(key)? {
        Some(json) => from_json(&json),
        None => Ok(Collection::new()),
    }
}

/// Overwrite `key` with the full collection
pub fn save_collection<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    collection: &Collection,
) -> ListResult<()> {
    let json = to_json(collection)?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdPolicy;
    use crate::storage::MemoryStore;

    #[test]
    fn test_absent_slot_is_empty() {
        let store = MemoryStore::new();
        assert!(load_collection(&store, "lists").unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut collection = Collection::new();
        let id = collection.push_list("Groceries", IdPolicy::CountBased).unwrap().id;
        collection
            .get_mut(id)
            .unwrap()
            .push_item("Milk", IdPolicy::CountBased)
            .unwrap();

        let mut store = MemoryStore::new();
        save_collection(&mut store, "lists", &collection).unwrap();

        assert_eq!(
            store.slot("lists"),
            Some(r#"[{"id":1,"name":"Groceries","items":[{"id":1,"description":"Milk"}]}]"#)
        );
        assert_eq!(load_collection(&store, "lists").unwrap(), collection);
    }

    #[test]
    fn test_malformed_slot_is_corrupt() {
        for json in ["not json", r#"{"id":1}"#, r#"[{"id":"one","name":"x","items":[]}]"#] {
            let store = MemoryStore::with_slot("lists", json);
            let err = load_collection(&store, "lists").unwrap_err();
            assert!(matches!(err, ListError::CorruptState(_)), "{json}: {err:?}");
        }
    }
}
