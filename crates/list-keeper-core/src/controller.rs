//! List Store Controller
//!
//! Owns the collection and the active selection. Every mutation is staged on
//! a copy, written to the store, and only committed in memory once the write
//! succeeded, so memory and storage never disagree.

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::domain::{Collection, Item, List};
use crate::error::{ListError, ListResult};
use crate::interaction::Interaction;
use crate::storage::{load_collection, save_collection, KeyValueStore};
use crate::view::{Refresh, ViewSink};

const NEW_LIST_PROMPT: &str = "Enter the name of the new list:";
const EDIT_ITEM_PROMPT: &str = "Edit item:";

/// Non-error result of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and was persisted
    Applied,
    /// The user dismissed a dialog or gave blank input
    Cancelled,
    /// The target id does not exist in the active list
    Ignored,
}

/// Everything the controller owns. The selection is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub collection: Collection,
    pub active: Option<u32>,
}

/// One entry of the list selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOption {
    pub id: u32,
    pub name: String,
}

pub struct ListController<S, I, V> {
    config: Config,
    state: ListState,
    store: S,
    interaction: I,
    view: V,
}

impl<S, I, V> ListController<S, I, V>
where
    S: KeyValueStore,
    I: Interaction,
    V: ViewSink,
{
    /// Controller with an empty collection; nothing is read from `store` yet
    pub fn new(config: Config, store: S, interaction: I, view: V) -> Self {
        Self {
            config,
            state: ListState::default(),
            store,
            interaction,
            view,
        }
    }

    /// Page-load entry point: build the controller and load the stored lists.
    ///
    /// Unreadable storage leaves an empty collection; the load error is
    /// handed back next to the controller so the caller can surface it.
    pub fn init(config: Config, store: S, interaction: I, view: V) -> (Self, Option<ListError>) {
        let mut controller = Self::new(config, store, interaction, view);
        let diagnostic = controller.load().err();
        (controller, diagnostic)
    }

    /// Page-unload hook. Storage is already current, only the selection goes.
    pub fn teardown(&mut self) {
        self.state.active = None;
        info!("Controller released ({} lists)", self.state.collection.len());
    }

    // ========================
    // Lists
    // ========================

    /// Replace the in-memory collection with the stored one and select the
    /// first list.
    ///
    /// On failure the collection is empty afterwards and the error is
    /// returned for diagnostics.
    pub fn load(&mut self) -> ListResult<()> {
        self.state.active = None;
        let result = match load_collection(&self.store, &self.config.storage_key) {
            Ok(collection) => {
                info!("Loaded {} lists from '{}'", collection.len(), self.config.storage_key);
                self.state.collection = collection;
                Ok(())
            }
            Err(e) => {
                error!("Could not load lists, starting empty: {}", e);
                self.state.collection = Collection::new();
                Err(e)
            }
        };
        self.view.refresh(Refresh::Selector);
        let first = self.state.collection.first_id();
        self.select_list(first);
        result
    }

    pub fn create_list(&mut self, name: &str) -> ListResult<Outcome> {
        let name = name.trim();
        if name.is_empty() {
            debug!("List creation cancelled");
            return Ok(Outcome::Cancelled);
        }

        let mut next = self.state.collection.clone();
        let id = next.push_list(name, self.config.id_policy)?.id;
        self.commit(next)?;

        info!("Created list {} '{}'", id, name);
        self.view.refresh(Refresh::Selector);
        Ok(Outcome::Applied)
    }

    /// Ask the user for a name, then create the list
    pub fn prompt_create_list(&mut self) -> ListResult<Outcome> {
        match self.interaction.prompt_text(NEW_LIST_PROMPT, None) {
            Some(name) => self.create_list(&name),
            None => {
                debug!("List creation cancelled");
                Ok(Outcome::Cancelled)
            }
        }
    }

    /// Make the list with `id` active. `None` or an unknown id clears the
    /// selection. Returns the resulting active id.
    pub fn select_list(&mut self, id: Option<u32>) -> Option<u32> {
        self.state.active = id.filter(|id| self.state.collection.get(*id).is_some());
        match self.state.active {
            Some(id) => debug!("Selected list {}", id),
            None => debug!("Selection cleared"),
        }

        self.view.refresh(Refresh::Selector);
        self.view.refresh(Refresh::Title);
        self.view.refresh(Refresh::Items);
        self.view.refresh(Refresh::DeleteToggle);
        self.state.active
    }

    /// Remove the active list after the user confirms
    pub fn delete_active_list(&mut self) -> ListResult<Outcome> {
        let list = self.require_active("delete list")?;
        let (id, name) = (list.id, list.name.clone());

        let question = format!("Are you sure you want to delete the list \"{}\"?", name);
        if !self.interaction.confirm(&question) {
            debug!("Deletion of list {} declined", id);
            return Ok(Outcome::Cancelled);
        }

        let mut next = self.state.collection.clone();
        next.remove(id);
        self.commit(next)?;

        info!("Deleted list {} '{}'", id, name);
        self.select_list(None);
        Ok(Outcome::Applied)
    }

    // ========================
    // Items of the active list
    // ========================

    pub fn add_item(&mut self, description: &str) -> ListResult<Outcome> {
        self.require_active("add item")?;
        let description = description.trim();
        if description.is_empty() {
            debug!("Blank item ignored");
            return Ok(Outcome::Cancelled);
        }

        let policy = self.config.id_policy;
        let added = self.change_active("add item", |list| {
            list.push_item(description, policy).map(|item| Some(item.id))
        })?;

        match added {
            Some(id) => {
                info!("Added item {} '{}'", id, description);
                self.view.refresh(Refresh::Items);
                Ok(Outcome::Applied)
            }
            None => Ok(Outcome::Ignored),
        }
    }

    pub fn delete_item(&mut self, id: u32) -> ListResult<Outcome> {
        match self.change_active("delete item", |list| Ok(list.remove_item(id)))? {
            Some(item) => {
                info!("Deleted item {} '{}'", item.id, item.description);
                self.view.refresh(Refresh::ItemRemoved(id));
                Ok(Outcome::Applied)
            }
            None => {
                debug!("Item {} not in active list", id);
                Ok(Outcome::Ignored)
            }
        }
    }

    pub fn edit_item(&mut self, id: u32, new_description: &str) -> ListResult<Outcome> {
        self.require_active("edit item")?;
        let new_description = new_description.trim();
        if new_description.is_empty() {
            debug!("Edit of item {} cancelled", id);
            return Ok(Outcome::Cancelled);
        }

        let edited = self.change_active("edit item", |list| {
            Ok(list.item_mut(id).map(|item| {
                item.description = new_description.to_string();
            }))
        })?;

        match edited {
            Some(()) => {
                info!("Edited item {}", id);
                self.view.refresh(Refresh::Item(id));
                Ok(Outcome::Applied)
            }
            None => {
                debug!("Item {} not in active list", id);
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Ask for a replacement pre-filled with the current text, then edit
    pub fn prompt_edit_item(&mut self, id: u32) -> ListResult<Outcome> {
        let current = self
            .require_active("edit item")?
            .item(id)
            .map(|item| item.description.clone());
        let Some(current) = current else {
            debug!("Item {} not in active list", id);
            return Ok(Outcome::Ignored);
        };

        match self.interaction.prompt_text(EDIT_ITEM_PROMPT, Some(&current)) {
            Some(text) => self.edit_item(id, &text),
            None => {
                debug!("Edit of item {} cancelled", id);
                Ok(Outcome::Cancelled)
            }
        }
    }

    // ========================
    // Read access for views
    // ========================

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn collection(&self) -> &Collection {
        &self.state.collection
    }

    pub fn active_id(&self) -> Option<u32> {
        self.state.active
    }

    pub fn active_list(&self) -> Option<&List> {
        self.state.active.and_then(|id| self.state.collection.get(id))
    }

    /// Items of the active list, empty without one
    pub fn active_items(&self) -> &[Item] {
        self.active_list().map(|list| list.items.as_slice()).unwrap_or(&[])
    }

    /// Name of the active list, or the configured default title
    pub fn title(&self) -> &str {
        self.active_list()
            .map(|list| list.name.as_str())
            .unwrap_or(self.config.default_title.as_str())
    }

    pub fn can_delete_list(&self) -> bool {
        self.active_list().is_some()
    }

    pub fn list_options(&self) -> Vec<ListOption> {
        self.state
            .collection
            .lists()
            .iter()
            .map(|list| ListOption { id: list.id, name: list.name.clone() })
            .collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn interaction(&self) -> &I {
        &self.interaction
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    // ========================
    // Internals
    // ========================

    fn require_active(&self, op: &str) -> ListResult<&List> {
        self.active_list().ok_or_else(|| {
            warn!("Cannot {}: no active list selected", op);
            ListError::NoActiveList
        })
    }

    /// Run `change` on a copy of the active list and commit when it returns
    /// `Ok(Some)`. `Ok(None)` or an error leaves everything untouched and
    /// skips the write.
    fn change_active<T>(
        &mut self,
        op: &str,
        change: impl FnOnce(&mut List) -> ListResult<Option<T>>,
    ) -> ListResult<Option<T>> {
        let list_id = self.require_active(op)?.id;
        let mut next = self.state.collection.clone();
        let list = next.get_mut(list_id).ok_or(ListError::NoActiveList)?;
        let Some(value) = change(list)? else {
            return Ok(None);
        };
        self.commit(next)?;
        Ok(Some(value))
    }

    fn commit(&mut self, next: Collection) -> ListResult<()> {
        if let Err(e) = save_collection(&mut self.store, &self.config.storage_key, &next) {
            error!("Failed to persist lists: {}", e);
            return Err(e);
        }
        self.state.collection = next;
        Ok(())
    }
}
