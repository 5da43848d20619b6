//! Browser Bindings
//!
//! Storage, dialogs and page configuration.

mod storage;
mod dialog;
mod config;

pub use storage::BrowserStore;
pub use dialog::BrowserDialogs;
pub use config::load_config;
