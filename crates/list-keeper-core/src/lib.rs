//! List Keeper Core
//!
//! Layered architecture:
//! - domain: lists, items and the collection that holds them
//! - storage: key-value store abstraction and JSON codec
//! - interaction / view: what the controller needs from the UI
//! - controller: the list store controller tying it all together

pub mod config;
pub mod controller;
pub mod domain;
pub mod interaction;
pub mod storage;
pub mod view;
mod error;


pub use config::{Config, IdPolicy};
pub use controller::{ListController, ListOption, ListState, Outcome};
pub use domain::{Collection, Item, List};
pub use error::{ListError, ListResult};
pub use interaction::{Interaction, ScriptedInteraction};
pub use storage::{KeyValueStore, MemoryStore};
pub use view::{RecordingView, Refresh, ViewSink};
