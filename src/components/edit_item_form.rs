//! Edit Item Form Component
//!
//! Inline editor for renaming the item currently held as draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{
    store_cancel_edit, store_finish_edit, store_set_edit_name, use_app_store, AppStateStoreFields,
};

/// Shown while an item is being edited
#[component]
pub fn EditItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let update_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = store.editing().get() else { return; };
        let service = ctx.service();

        spawn_local(async move {
            if let Ok(outcome) = service.rename(&draft).await {
                if outcome.is_applied() {
                    store_finish_edit(&store);
                    ctx.reload();
                }
            }
        });
    };

    view! {
        <Show when=move || store.editing().with(|draft| draft.is_some())>
            <form class="edit-item-form" on:submit=update_item>
                <span class="edit-label">"Editing:"</span>
                <input
                    type="text"
                    prop:value=move || store.editing().with(|draft| {
                        draft.as_ref().map(|d| d.name.clone()).unwrap_or_default()
                    })
                    on:input=move |ev| store_set_edit_name(&store, event_target_value(&ev))
                />
                <button type="submit" class="update-btn">"Update"</button>
                <button type="button" class="cancel-btn" on:click=move |_| store_cancel_edit(&store)>
                    "Cancel"
                </button>
            </form>
        </Show>
    }
}
