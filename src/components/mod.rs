//! UI Components
//!
//! Leptos components for the list selector, the item list and the entry form.

mod list_selector;
mod new_item_form;
mod item_list;
mod item_row;

pub use list_selector::ListSelector;
pub use new_item_form::NewItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;
