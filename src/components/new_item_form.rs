//! New Item Form Component
//!
//! Text field and Add button for items of the active list.

use leptos::prelude::*;
use list_keeper_core::Outcome;

use crate::context::AppContext;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if ctx.run(|c| c.add_item(&text)) == Some(Outcome::Applied) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add new item..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
