//! New Item Form Component
//!
//! Form for creating new items.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

/// Form for creating a new item
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_name, set_new_name) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        let service = ctx.service();

        spawn_local(async move {
            if let Ok(outcome) = service.add(&name).await {
                if outcome.is_applied() {
                    set_new_name.set(String::new());
                    ctx.reload();
                }
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="New item name"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add Item"</button>
        </form>
    }
}
