//! Item domain entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A single text entry owned by exactly one list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub description: String,
}

impl Entity for Item {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Item {
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self { id, description: description.into() }
    }
}
