//! List Selector Component
//!
//! Single-selection control over all lists, with the create and delete
//! triggers next to it.

use leptos::prelude::*;

use crate::context::AppContext;

/// `<option value>` back to a list id; the placeholder's `""` means none
fn parse_option_value(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

#[component]
pub fn ListSelector() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let placeholder = ctx.read(|c| c.config().select_placeholder.clone());

    let options = move || {
        ctx.surfaces.selector.track();
        ctx.read(|c| c.list_options().into_iter().enumerate().collect::<Vec<_>>())
    };
    let nothing_selected = move || {
        ctx.surfaces.selector.track();
        ctx.read(|c| c.active_id().is_none())
    };
    let can_delete = move || {
        ctx.surfaces.delete_toggle.track();
        ctx.read(|c| c.can_delete_list())
    };

    let on_change = move |ev| {
        let id = parse_option_value(&event_target_value(&ev));
        ctx.dispatch(|c| c.select_list(id));
    };

    view! {
        <div class="list-selector">
            <select on:change=on_change>
                <option value="" prop:selected=nothing_selected>{placeholder}</option>
                <For
                    each=options
                    key=|(index, option)| (*index, option.id, option.name.clone())
                    children=move |(_, option)| {
                        let id = option.id;
                        let is_active = move || {
                            ctx.surfaces.selector.track();
                            ctx.read(|c| c.active_id() == Some(id))
                        };
                        view! {
                            <option value=id.to_string() prop:selected=is_active>
                                {option.name}
                            </option>
                        }
                    }
                />
            </select>

            <button
                class="create-list-btn"
                on:click=move |_| {
                    let _ = ctx.run(|c| c.prompt_create_list());
                }
            >
                "New list"
            </button>
            <button
                class="danger delete-list-btn"
                disabled=move || !can_delete()
                on:click=move |_| {
                    let _ = ctx.run(|c| c.delete_active_list());
                }
            >
                "Delete list"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option_value() {
        assert_eq!(parse_option_value("3"), Some(3));
        assert_eq!(parse_option_value(""), None);
        assert_eq!(parse_option_value("abc"), None);
    }
}
