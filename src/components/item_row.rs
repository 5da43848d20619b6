//! Item Row Component
//!
//! One item with its delete and edit buttons. The handlers capture the id.

use leptos::prelude::*;
use list_keeper_core::Item;

use crate::context::AppContext;

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;

    view! {
        <li class="item-row">
            <span class="item-text">{item.description}</span>
            <button
                class="danger"
                title="Delete item"
                on:click=move |_| {
                    let _ = ctx.run(|c| c.delete_item(id));
                }
            >
                "❌"
            </button>
            <button
                class="edit"
                title="Edit item"
                on:click=move |_| {
                    let _ = ctx.run(|c| c.prompt_edit_item(id));
                }
            >
                "✏️"
            </button>
        </li>
    }
}
