//! Storage Layer
//!
//! Key-value store abstraction and the JSON codec for the collection.

mod traits;
mod memory;
mod codec;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use codec::{from_json, load_collection, save_collection, to_json};
