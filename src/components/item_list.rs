//! Item List Component
//!
//! Items of the active list; empty while no list is active.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::AppContext;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let items = move || {
        ctx.surfaces.items.track();
        ctx.read(|c| c.active_items().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <ul class="item-list">
            <For
                each=items
                // Count-based ids can repeat, so the position is part of the key
                key=|(index, item)| (*index, item.id, item.description.clone())
                children=move |(_, item)| view! { <ItemRow item=item /> }
            />
        </ul>
    }
}
