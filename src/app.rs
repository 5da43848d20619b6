//! List Keeper Frontend App
//!
//! Builds the controller from the page config and browser storage, then lays
//! out the selector, title, entry form and item list.

use leptos::ev;
use leptos::prelude::*;
use list_keeper_core::{ListController, RecordingView};

use crate::components::{ItemList, ListSelector, NewItemForm};
use crate::context::AppContext;
use crate::platform::{self, BrowserDialogs, BrowserStore};

#[component]
pub fn App() -> impl IntoView {
    let config = platform::load_config();
    tracing::info!("Starting with storage key '{}'", config.storage_key);

    let (controller, diagnostic) = ListController::init(
        config,
        BrowserStore::open(),
        BrowserDialogs,
        RecordingView::new(),
    );
    let ctx = AppContext::new(controller);
    provide_context(ctx);

    // Release the controller when the page goes away
    let _ = window_event_listener(ev::pagehide, move |_| ctx.teardown());

    // Unreadable saved lists: the app runs on an empty collection
    let load_error = diagnostic.map(|e| format!("Saved lists could not be read ({}). Starting empty.", e));

    let title = move || {
        ctx.surfaces.title.track();
        ctx.read(|c| c.title().to_string())
    };

    view! {
        <main class="app-layout">
            {load_error.map(|message| view! { <p class="load-error">{message}</p> })}
            <ListSelector />
            <h1 class="list-title">{title}</h1>
            <NewItemForm />
            <ItemList />
        </main>
    }
}
