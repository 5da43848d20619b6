//! Collection of all lists
//!
//! The collection is the unit of persistence: it is always written and read
//! as a whole.

use serde::{Deserialize, Serialize};

use super::entity::next_id;
use super::list::List;
use crate::config::IdPolicy;
use crate::error::ListResult;

/// Ordered sequence of every list the user owns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    lists: Vec<List>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(lists: Vec<List>) -> Self {
        Self { lists }
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn first_id(&self) -> Option<u32> {
        self.lists.first().map(|list| list.id)
    }

    pub fn get(&self, id: u32) -> Option<&List> {
        self.lists.iter().find(|list| list.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    /// Append an empty list named `name` and return it
    pub fn push_list(&mut self, name: impl Into<String>, policy: IdPolicy) -> ListResult<&List> {
        let id = next_id(&self.lists, policy)?;
        self.lists.push(List::new(id, name));
        Ok(&self.lists[self.lists.len() - 1])
    }

    /// Remove the list with `id`, dropping its items with it
    pub fn remove(&mut self, id: u32) -> Option<List> {
        let index = self.lists.iter().position(|list| list.id == id)?;
        Some(self.lists.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_remove_lists() {
        let mut collection = Collection::new();
        collection.push_list("Groceries", IdPolicy::NextAfterMax).unwrap();
        collection.push_list("Hardware", IdPolicy::NextAfterMax).unwrap();

        assert_eq!(collection.first_id(), Some(1));
        assert_eq!(collection.get(2).map(|l| l.name.as_str()), Some("Hardware"));

        let removed = collection.remove(1).expect("list 1 exists");
        assert_eq!(removed.name, "Groceries");
        assert_eq!(collection.first_id(), Some(2));
        assert!(collection.remove(1).is_none());
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut collection = Collection::new();
        collection.push_list("Groceries", IdPolicy::CountBased).unwrap();

        let json = serde_json::to_string(&collection).unwrap();
        assert_eq!(json, r#"[{"id":1,"name":"Groceries","items":[]}]"#);
    }
}
