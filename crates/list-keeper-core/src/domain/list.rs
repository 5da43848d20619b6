//! List domain entity

use serde::{Deserialize, Serialize};

use super::entity::{next_id, Entity};
use super::item::Item;
use crate::config::IdPolicy;
use crate::error::ListResult;

/// A named, ordered collection of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: u32,
    pub name: String,
    pub items: Vec<Item>,
}

impl Entity for List {
    fn id(&self) -> u32 {
        self.id
    }
}

impl List {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: u32) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Append a new item and return it
    pub fn push_item(&mut self, description: impl Into<String>, policy: IdPolicy) -> ListResult<&Item> {
        let id = next_id(&self.items, policy)?;
        self.items.push(Item::new(id, description));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove the first item with `id`.
    ///
    /// Only one item goes even when a count-based id has been handed out twice.
    pub fn remove_item(&mut self, id: u32) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}
