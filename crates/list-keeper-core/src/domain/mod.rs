//! Domain Layer
//!
//! Lists, their items, and the collection that holds them.
//! This layer has NO platform dependencies (only serde for serialization).

mod entity;
mod item;
mod list;
mod collection;

pub use entity::{next_id, Entity};
pub use item::Item;
pub use list::List;
pub use collection::Collection;
